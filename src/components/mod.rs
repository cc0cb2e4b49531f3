//! UI Components for Card Flip.
//!
//! The card form widget and the card preview it drives.

mod card_preview;
mod credit_card;

pub use card_preview::CardPreview;
pub use credit_card::CreditCardForm;
