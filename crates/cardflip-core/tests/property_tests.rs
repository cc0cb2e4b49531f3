//! Property-based tests for the CardForm state machine
//!
//! Uses proptest to drive random event sequences and check that caps,
//! flip rules, and the card-number display shape always hold.

use cardflip_core::view::card_number_display;
use cardflip_core::{
    CardForm, CardSide, ControlEvent, Field, FocusTarget, FormControl, CARD_NUMBER_MAX_LEN,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Digit strings, sometimes longer than any cap
fn digits_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{0,24}").expect("valid regex")
}

/// Free text of varied length, including multi-byte characters
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z é]{0,30}").expect("valid regex")
}

fn control_strategy() -> impl Strategy<Value = FormControl> {
    prop::sample::select(FormControl::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = ControlEvent> {
    prop_oneof![
        2 => control_strategy().prop_map(ControlEvent::Focus),
        1 => control_strategy().prop_map(ControlEvent::Blur),
        3 => (control_strategy(), text_strategy())
            .prop_map(|(control, value)| ControlEvent::Change(control, value)),
        3 => (control_strategy(), digits_strategy())
            .prop_map(|(control, value)| ControlEvent::Change(control, value)),
    ]
}

fn events_strategy(max_events: usize) -> impl Strategy<Value = Vec<ControlEvent>> {
    prop::collection::vec(event_strategy(), 0..max_events)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// No sequence of events pushes a clamped field past its cap
    #[test]
    fn caps_always_hold(events in events_strategy(60)) {
        let mut form = CardForm::new();
        for event in events {
            form.handle(event);
            for field in Field::ALL {
                prop_assert!(form.values().get(field).chars().count() <= field.max_len());
            }
        }
    }

    /// An update is applied exactly when it fits, and a dropped update
    /// leaves the previous value untouched
    #[test]
    fn update_applies_iff_within_cap(first in digits_strategy(), second in digits_strategy()) {
        for field in Field::ALL {
            let mut form = CardForm::new();
            form.update_field(field, &first);
            let before = form.values().get(field).to_string();

            let applied = form.update_field(field, &second);
            prop_assert_eq!(applied, second.chars().count() <= field.max_len());
            if applied {
                prop_assert_eq!(form.values().get(field), second.as_str());
            } else {
                prop_assert_eq!(form.values().get(field), before.as_str());
            }
        }
    }

    /// The card number always renders as four space-separated groups of four
    #[test]
    fn card_number_display_shape(digits in prop::string::string_regex("[0-9]{0,16}").expect("valid regex")) {
        let display = card_number_display(&digits);
        let groups: Vec<&str> = display.split(' ').collect();
        prop_assert_eq!(groups.len(), 4);
        for group in &groups {
            prop_assert_eq!(group.chars().count(), 4);
        }

        let compact: String = groups.concat();
        prop_assert!(compact.starts_with(&digits));
        prop_assert_eq!(compact.chars().count(), CARD_NUMBER_MAX_LEN);
        prop_assert!(compact[digits.len()..].chars().all(|c| c == '#'));
    }

    /// Focus decides the side, whatever came before
    #[test]
    fn focus_decides_side(events in events_strategy(30), control in control_strategy()) {
        let mut form = CardForm::new();
        for event in events {
            form.handle(event);
        }

        form.handle(ControlEvent::Focus(control));
        let expected = if control == FormControl::Cvc { CardSide::Back } else { CardSide::Front };
        prop_assert_eq!(form.side(), expected);
        prop_assert_eq!(form.focus(), control.focus_target());
    }

    /// Blur clears focus and never touches the side or the values
    #[test]
    fn blur_only_clears_focus(events in events_strategy(30), control in control_strategy()) {
        let mut form = CardForm::new();
        for event in events {
            form.handle(event);
        }

        let before = form.clone();
        form.handle(ControlEvent::Blur(control));
        prop_assert_eq!(form.focus(), FocusTarget::None);
        prop_assert_eq!(form.side(), before.side());
        prop_assert_eq!(form.values(), before.values());
    }

    /// The back face is only ever shown while the CVC has focus or after it
    /// was blurred
    #[test]
    fn back_side_only_with_cvc_or_none(events in events_strategy(60)) {
        let mut form = CardForm::new();
        for event in events {
            form.handle(event);
            if form.side() == CardSide::Back {
                prop_assert!(matches!(form.focus(), FocusTarget::Cvc | FocusTarget::None));
            }
        }
    }

    /// Rendering is a pure function of the state
    #[test]
    fn view_is_deterministic(events in events_strategy(40)) {
        let mut form = CardForm::new();
        for event in events {
            form.handle(event);
        }
        prop_assert_eq!(form.view(), form.clone().view());
        prop_assert_eq!(form.view().outline, *form.focus().position());
    }
}
