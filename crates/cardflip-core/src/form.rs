//! The card form state machine.
//!
//! State is the five field values, the displayed [`CardSide`], and the
//! current [`FocusTarget`]. Focus decides the side: front-face fields flip
//! the card to the front, the CVC flips it to the back. Blur only clears the
//! focus target, so the last side stays visible until another field takes
//! focus.

use tracing::{debug, trace};

use crate::control::{ControlEvent, FormControl};
use crate::expiration::year_suffix;
use crate::field::{Field, FieldValues};
use crate::focus::{CardSide, FocusTarget};
use crate::view::{
    card_number_display, expiration_display, holder_display, CardView, FaceRotation,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    values: FieldValues,
    side: CardSide,
    focus: FocusTarget,
}

impl CardForm {
    /// Empty form showing the front face with nothing focused
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn side(&self) -> CardSide {
        self.side
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn focus_field(&mut self, target: FocusTarget) {
        self.focus = target;
        if let Some(side) = target.side() {
            if side != self.side {
                debug!(focus = target.label(), side = side.label(), "Flipping card");
            }
            self.side = side;
        }
        debug!(focus = target.label(), "Focus changed");
    }

    pub fn blur_field(&mut self) {
        debug!(previous = self.focus.label(), "Focus cleared");
        self.focus = FocusTarget::None;
    }

    /// Store `raw` in `field` if it fits the field's cap.
    ///
    /// Oversize values are dropped and the previous value kept. Returns
    /// whether the value was stored.
    pub fn update_field(&mut self, field: Field, raw: &str) -> bool {
        let applied = self.values.set_clamped(field, raw);
        if applied {
            trace!(?field, len = raw.chars().count(), "Field updated");
        } else {
            trace!(?field, cap = field.max_len(), "Oversize input dropped");
        }
        applied
    }

    pub fn select_expiration_month(&mut self, value: &str) {
        trace!(month = value, "Expiration month selected");
        self.values.set_expiration_month(value.to_string());
    }

    /// Store the two-digit suffix of a selected four-digit year.
    pub fn select_expiration_year(&mut self, value: &str) {
        trace!(year = value, "Expiration year selected");
        self.values.set_expiration_year(year_suffix(value));
    }

    /// Route a control event to the matching operation.
    pub fn handle(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Focus(control) => self.focus_field(control.focus_target()),
            ControlEvent::Blur(_) => self.blur_field(),
            ControlEvent::Change(control, value) => match control {
                FormControl::CardNumber => {
                    self.update_field(Field::CardNumber, &value);
                }
                FormControl::HolderName => {
                    self.update_field(Field::HolderName, &value);
                }
                FormControl::Cvc => {
                    self.update_field(Field::Cvc, &value);
                }
                FormControl::ExpirationMonth => self.select_expiration_month(&value),
                FormControl::ExpirationYear => self.select_expiration_year(&value),
            },
        }
    }

    /// Derive the card presentation from the current state.
    pub fn view(&self) -> CardView {
        CardView {
            card_number: card_number_display(self.values.card_number()),
            holder_name: holder_display(self.values.holder_name()).to_string(),
            expiration: expiration_display(
                self.values.expiration_month(),
                self.values.expiration_year(),
            ),
            cvc: self.values.cvc().to_string(),
            side: self.side,
            rotation: FaceRotation::for_side(self.side),
            outline: *self.focus.position(),
        }
    }
}
