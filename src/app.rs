use dioxus::prelude::*;

use crate::components::CreditCardForm;
use crate::theme::stylesheet;

/// Root application component.
///
/// Provides global styles and centers the card form on a full-viewport
/// canvas.
#[component]
pub fn App() -> Element {
    let css = stylesheet();

    rsx! {
        style { {css} }
        main { class: "app-container",
            CreditCardForm {}
        }
    }
}
