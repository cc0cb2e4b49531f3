//! Card Flip UI Components
//!
//! Dioxus form controls for the card form. Every control reports focus,
//! blur, and value changes to its parent, which owns all state.
//!
//! ## Styling
//!
//! Controls render plain class names (`input-block`, `input-label`,
//! `input-field`, `select-field`); the stylesheet lives in the application.

pub mod components;

pub use components::*;
