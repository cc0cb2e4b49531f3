//! Pure derivation of what the card shows from the form state.

use crate::field::CARD_NUMBER_MAX_LEN;
use crate::focus::{CardSide, FocusPosition};

/// Glyph padding unfilled card-number positions
pub const FILLER: char = '#';
pub const HOLDER_PLACEHOLDER: &str = "HOLDER NAME";
pub const MONTH_PLACEHOLDER: &str = "MM";
pub const YEAR_PLACEHOLDER: &str = "YY";

const GROUP_LEN: usize = 4;

/// Pad `digits` with [`FILLER`] to 16 characters and split into groups of
/// four.
///
/// ```
/// use cardflip_core::view::card_number_display;
///
/// assert_eq!(card_number_display("1234"), "1234 #### #### ####");
/// ```
pub fn card_number_display(digits: &str) -> String {
    let len = digits.chars().count();
    let padded: Vec<char> = digits
        .chars()
        .chain(std::iter::repeat(FILLER).take(CARD_NUMBER_MAX_LEN.saturating_sub(len)))
        .collect();

    let mut out = String::with_capacity(padded.len() + padded.len() / GROUP_LEN);
    for group in padded.chunks(GROUP_LEN) {
        out.extend(group);
        if group.len() == GROUP_LEN {
            out.push(' ');
        }
    }
    out.trim().to_string()
}

pub fn holder_display(name: &str) -> &str {
    if name.is_empty() {
        HOLDER_PLACEHOLDER
    } else {
        name
    }
}

pub fn expiration_display(month: &str, year: &str) -> String {
    let month = if month.is_empty() { MONTH_PLACEHOLDER } else { month };
    let year = if year.is_empty() { YEAR_PLACEHOLDER } else { year };
    format!("{} / {}", month, year)
}

/// Paired Y-axis rotations, in degrees, for the two card faces.
///
/// The back face turns on to 360 rather than back to 0 so the flip keeps
/// travelling in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRotation {
    pub front: u16,
    pub back: u16,
}

impl FaceRotation {
    pub fn for_side(side: CardSide) -> Self {
        match side {
            CardSide::Front => FaceRotation { front: 0, back: 180 },
            CardSide::Back => FaceRotation { front: 180, back: 360 },
        }
    }

    pub fn front_css(&self) -> String {
        format!("transform: rotateY({}deg);", self.front)
    }

    pub fn back_css(&self) -> String {
        format!("transform: rotateY({}deg);", self.back)
    }
}

/// Everything the card preview renders, derived from a [`crate::CardForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub card_number: String,
    pub holder_name: String,
    pub expiration: String,
    pub cvc: String,
    pub side: CardSide,
    pub rotation: FaceRotation,
    pub outline: FocusPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_number_is_all_filler() {
        assert_eq!(card_number_display(""), "#### #### #### ####");
    }

    #[test]
    fn partial_number_keeps_fixed_width() {
        assert_eq!(card_number_display("1234"), "1234 #### #### ####");
        assert_eq!(card_number_display("12345"), "1234 5### #### ####");
    }

    #[test]
    fn full_number_has_no_filler() {
        assert_eq!(card_number_display("4242424242424242"), "4242 4242 4242 4242");
    }

    #[test]
    fn holder_placeholder() {
        assert_eq!(holder_display(""), "HOLDER NAME");
        assert_eq!(holder_display("GRACE HOPPER"), "GRACE HOPPER");
    }

    #[test]
    fn expiration_placeholders() {
        assert_eq!(expiration_display("", ""), "MM / YY");
        assert_eq!(expiration_display("7", ""), "7 / YY");
        assert_eq!(expiration_display("", "27"), "MM / 27");
        assert_eq!(expiration_display("11", "39"), "11 / 39");
    }

    #[test]
    fn rotations() {
        let front = FaceRotation::for_side(CardSide::Front);
        assert_eq!(front.front_css(), "transform: rotateY(0deg);");
        assert_eq!(front.back_css(), "transform: rotateY(180deg);");

        let back = FaceRotation::for_side(CardSide::Back);
        assert_eq!(back.front_css(), "transform: rotateY(180deg);");
        assert_eq!(back.back_css(), "transform: rotateY(360deg);");
    }
}
