//! Form controls and the events they emit.

use std::fmt;
use std::str::FromStr;

use crate::error::CardFormError;
use crate::field::Field;
use crate::focus::FocusTarget;

/// The five controls of the card form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormControl {
    CardNumber,
    HolderName,
    ExpirationMonth,
    ExpirationYear,
    Cvc,
}

impl FormControl {
    pub const ALL: [FormControl; 5] = [
        FormControl::CardNumber,
        FormControl::HolderName,
        FormControl::ExpirationMonth,
        FormControl::ExpirationYear,
        FormControl::Cvc,
    ];

    /// Value of the control's `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            FormControl::CardNumber => "cardNumber",
            FormControl::HolderName => "holderName",
            FormControl::ExpirationMonth => "expirationMonth",
            FormControl::ExpirationYear => "expirationYear",
            FormControl::Cvc => "cvc",
        }
    }

    /// Label shown above the control. Both selectors share one label.
    pub fn label(self) -> &'static str {
        match self {
            FormControl::CardNumber => "Card Number",
            FormControl::HolderName => "Holder Name",
            FormControl::ExpirationMonth | FormControl::ExpirationYear => "Expiration Date",
            FormControl::Cvc => "CVC",
        }
    }

    /// `type` attribute for text inputs; `None` for selectors
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormControl::CardNumber | FormControl::Cvc => Some("number"),
            FormControl::HolderName => Some("text"),
            FormControl::ExpirationMonth | FormControl::ExpirationYear => None,
        }
    }

    pub fn focus_target(self) -> FocusTarget {
        match self {
            FormControl::CardNumber => FocusTarget::CardNumber,
            FormControl::HolderName => FocusTarget::CardHolder,
            FormControl::ExpirationMonth | FormControl::ExpirationYear => {
                FocusTarget::ExpirationDate
            }
            FormControl::Cvc => FocusTarget::Cvc,
        }
    }

    /// The clamped field behind a text input
    pub fn field(self) -> Option<Field> {
        match self {
            FormControl::CardNumber => Some(Field::CardNumber),
            FormControl::HolderName => Some(Field::HolderName),
            FormControl::Cvc => Some(Field::Cvc),
            FormControl::ExpirationMonth | FormControl::ExpirationYear => None,
        }
    }

    pub fn max_len(self) -> Option<usize> {
        self.field().map(Field::max_len)
    }

    /// Placeholder option for selectors
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FormControl::ExpirationMonth => Some("Month"),
            FormControl::ExpirationYear => Some("Year"),
            _ => None,
        }
    }
}

impl fmt::Display for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormControl {
    type Err = CardFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormControl::ALL
            .into_iter()
            .find(|control| control.name() == s)
            .ok_or_else(|| CardFormError::UnknownControl(s.to_string()))
    }
}

/// A user interaction with one of the form controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    Focus(FormControl),
    Blur(FormControl),
    /// New raw value typed or selected
    Change(FormControl, String),
}
