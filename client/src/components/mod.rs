//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections from the content catalog and
//! read/write the section state signals provided by `App`.

pub mod about_section;
pub mod contact_form;
pub mod contact_section;
pub mod experience_timeline;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod parallax_dots;
pub mod project_card;
pub mod project_detail_modal;
pub mod projects_section;
pub mod skills_section;
pub mod toast;
