//! Outbound effects: the relay API and the contact delivery collaborators.

pub mod api;
pub mod delivery;
