use dioxus::prelude::*;

use crate::icons::{FaBars, FaBell, FaMagnifyingGlass, FaXmark};
use crate::{use_auth, Icon};

/// Top bar: sidebar toggle, a decorative search box and the user's avatar.
#[component]
pub fn Header(on_toggle_sidebar: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut mobile_search = use_signal(|| false);

    let initial = auth.session().map_or('A', |s| s.initial());

    rsx! {
        header {
            class: "app-header no-print",

            div {
                class: "app-header-left",
                button {
                    class: "icon-button",
                    title: "Toggle sidebar",
                    onclick: move |_| on_toggle_sidebar.call(()),
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
                label {
                    class: if mobile_search() { "header-search expanded" } else { "header-search" },
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: "Search anything...",
                    }
                    if mobile_search() {
                        button {
                            class: "icon-button header-search-close",
                            onclick: move |_| mobile_search.set(false),
                            Icon { icon: FaXmark, width: 14, height: 14 }
                        }
                    }
                }
            }

            div {
                class: "app-header-right",
                button {
                    class: "icon-button header-search-toggle",
                    onclick: move |_| mobile_search.set(true),
                    Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                }
                button {
                    class: "icon-button notifications",
                    Icon { icon: FaBell, width: 16, height: 16 }
                    span { class: "notification-dot" }
                }
                div { class: "avatar", "{initial}" }
            }
        }
    }
}
