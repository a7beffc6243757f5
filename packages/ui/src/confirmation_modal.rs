use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::views::ModalOverlay;
use crate::Icon;

/// Yes/no dialog for destructive actions. The parent decides when it is shown and
/// closes it from either callback.
#[component]
pub fn ConfirmationModal(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_text: String,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            class: "modal-card confirm",
            div {
                class: "confirm-icon",
                Icon { icon: FaCircleExclamation, width: 24, height: 24 }
            }
            h3 { class: "modal-title", "{title}" }
            p { class: "modal-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "button secondary",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "button danger",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_text}"
                }
            }
        }
    }
}
