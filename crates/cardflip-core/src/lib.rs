//! Card Flip Core Library
//!
//! State and presentation logic for an interactive credit-card preview that
//! follows a data-entry form.
//!
//! ## Overview
//!
//! As the user types a card number, holder name, expiration date, or CVC,
//! the preview flips to the face carrying that field and outlines it. This
//! crate holds everything that does not need a renderer:
//!
//! - [`CardForm`]: the focus/flip state machine and clamped field updates
//! - [`CardView`]: the pure projection of a form onto what the card shows
//! - [`FOCUS_POSITIONS`]: static outline geometry per focus target
//! - [`FormControl`] / [`ControlEvent`]: the five form controls and their events
//!
//! ## Quick Start
//!
//! ```
//! use cardflip_core::{CardForm, CardSide, ControlEvent, FormControl};
//!
//! let mut form = CardForm::new();
//! form.handle(ControlEvent::Focus(FormControl::CardNumber));
//! form.handle(ControlEvent::Change(FormControl::CardNumber, "1234".into()));
//! assert_eq!(form.view().card_number, "1234 #### #### ####");
//!
//! form.handle(ControlEvent::Focus(FormControl::Cvc));
//! assert_eq!(form.side(), CardSide::Back);
//! ```

pub mod control;
pub mod error;
pub mod expiration;
pub mod field;
pub mod focus;
pub mod form;
pub mod view;

// Re-exports
pub use control::{ControlEvent, FormControl};
pub use error::{CardFormError, CardFormResult};
pub use expiration::{month_options, year_options, year_suffix, MONTH_RANGE, YEAR_RANGE};
pub use field::{Field, FieldValues, CARD_NUMBER_MAX_LEN, CVC_MAX_LEN, HOLDER_NAME_MAX_LEN};
pub use focus::{CardSide, FocusPosition, FocusTarget, Length, FOCUS_POSITIONS};
pub use form::CardForm;
pub use view::{CardView, FaceRotation};
