//! Client-side UI state.
//!
//! DESIGN
//! ======
//! One state struct per independent page region (`shell`, `gallery`,
//! `contact_form`). Each is held in its own `RwSignal` context so the
//! regions never share mutable state, and each exposes plain methods so the
//! transitions are testable without a renderer.

pub mod contact_form;
pub mod gallery;
pub mod shell;
