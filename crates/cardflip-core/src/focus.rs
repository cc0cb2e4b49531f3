//! Card side, focus target, and the static focus-outline table.
//!
//! | Target | left | top | width | height | opacity |
//! |--------|------|-----|-------|--------|---------|
//! | CardNumber | 36px | 98px | 354px | 40px | 1 |
//! | CardHolder | 16px | 220px | 200px | 32px | 1 |
//! | ExpirationDate | 296px | 220px | 80px | 32px | 1 |
//! | Cvc | 0 | 0 | 100% | 100% | 0 |
//! | None | 0 | 0 | 100% | 100% | 0 |

use std::fmt;

/// Which face of the card is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

impl CardSide {
    pub fn is_front(self) -> bool {
        matches!(self, CardSide::Front)
    }

    pub fn label(self) -> &'static str {
        match self {
            CardSide::Front => "front",
            CardSide::Back => "back",
        }
    }
}

/// The form field that currently has input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusTarget {
    CardNumber,
    CardHolder,
    ExpirationDate,
    Cvc,
    #[default]
    None,
}

impl FocusTarget {
    pub const ALL: [FocusTarget; 5] = [
        FocusTarget::CardNumber,
        FocusTarget::CardHolder,
        FocusTarget::ExpirationDate,
        FocusTarget::Cvc,
        FocusTarget::None,
    ];

    /// The side that must be shown while this target has focus.
    ///
    /// `None` leaves the current side in place.
    pub fn side(self) -> Option<CardSide> {
        match self {
            FocusTarget::CardNumber | FocusTarget::CardHolder | FocusTarget::ExpirationDate => {
                Some(CardSide::Front)
            }
            FocusTarget::Cvc => Some(CardSide::Back),
            FocusTarget::None => None,
        }
    }

    /// Outline geometry for this target
    pub fn position(self) -> &'static FocusPosition {
        let index = match self {
            FocusTarget::CardNumber => 0,
            FocusTarget::CardHolder => 1,
            FocusTarget::ExpirationDate => 2,
            FocusTarget::Cvc => 3,
            FocusTarget::None => 4,
        };
        &FOCUS_POSITIONS[index]
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusTarget::CardNumber => "cardNumber",
            FocusTarget::CardHolder => "cardHolder",
            FocusTarget::ExpirationDate => "expirationDate",
            FocusTarget::Cvc => "cvc",
            FocusTarget::None => "none",
        }
    }
}

/// A CSS length used by the outline geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Zero,
    Px(u16),
    Percent(u16),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Zero => write!(f, "0"),
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// Rectangle and visibility of the focus outline drawn over the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPosition {
    pub left: Length,
    pub top: Length,
    pub width: Length,
    pub height: Length,
    /// 1 draws the outline, 0 keeps it in place but invisible
    pub opacity: u8,
}

impl FocusPosition {
    /// Full-card rectangle with the outline hidden
    pub const HIDDEN: FocusPosition = FocusPosition {
        left: Length::Zero,
        top: Length::Zero,
        width: Length::Percent(100),
        height: Length::Percent(100),
        opacity: 0,
    };

    const fn visible(left: u16, top: u16, width: u16, height: u16) -> Self {
        FocusPosition {
            left: Length::Px(left),
            top: Length::Px(top),
            width: Length::Px(width),
            height: Length::Px(height),
            opacity: 1,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0
    }

    /// Inline style for the outline element
    pub fn css(&self) -> String {
        format!(
            "left: {}; top: {}; width: {}; height: {}; opacity: {};",
            self.left, self.top, self.width, self.height, self.opacity
        )
    }
}

/// Outline geometry, in [`FocusTarget::ALL`] order.
pub static FOCUS_POSITIONS: [FocusPosition; 5] = [
    FocusPosition::visible(36, 98, 354, 40),
    FocusPosition::visible(16, 220, 200, 32),
    FocusPosition::visible(296, 220, 80, 32),
    FocusPosition::HIDDEN,
    FocusPosition::HIDDEN,
];
