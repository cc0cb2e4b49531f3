//! Error types for Card Flip

use thiserror::Error;

/// Error type for card form lookups.
///
/// The state machine itself never fails; errors only arise when mapping
/// external identifiers (such as a form control's `name` attribute) onto
/// the closed set of controls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardFormError {
    /// No form control carries this name
    #[error("Unknown form control: {0}")]
    UnknownControl(String),
}

/// Result type alias using CardFormError
pub type CardFormResult<T> = Result<T, CardFormError>;
