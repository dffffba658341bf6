//! Shared content model for the portfolio site.
//!
//! This crate owns the data used by both the server and the `client` app: the
//! content catalog (profile, skills, experience, projects), the project
//! category filter, and the contact message exchanged with the relay
//! endpoint. The catalog is embedded at build time from
//! `data/portfolio.yaml` and validated once when first loaded.

pub mod catalog;
pub mod contact;
pub mod project;

pub use catalog::{Catalog, ContentError, ContentWarning, builtin};
pub use contact::{ContactField, ContactMessage, ContactReceipt, ContactValidationError, DeliveryError};
pub use project::{CategoryFilter, LinkKind, Media, Project, ProjectLink, filter_projects};
