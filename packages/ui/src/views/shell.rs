use dioxus::prelude::*;

use crate::{platform, use_auth, AppSidebar, Header, NavItem};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

/// Authenticated page frame: sidebar, header and the routed page as `children`.
///
/// Signing out happens here; `on_logout` only has to route to the login page.
#[component]
pub fn ShellView(
    active: NavItem,
    on_navigate: EventHandler<NavItem>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let mut sidebar_open = use_signal(platform::is_wide_viewport);

    rsx! {
        document::Stylesheet { href: SHELL_CSS }

        div {
            class: "shell",
            AppSidebar {
                open: sidebar_open(),
                active,
                on_navigate: move |item| {
                    if !platform::is_wide_viewport() {
                        sidebar_open.set(false);
                    }
                    on_navigate.call(item);
                },
                on_toggle: move |_| sidebar_open.set(!sidebar_open()),
                on_logout: move |_| {
                    auth.logout();
                    on_logout.call(());
                },
            }
            div {
                class: "shell-main",
                Header { on_toggle_sidebar: move |_| sidebar_open.set(!sidebar_open()) }
                main {
                    class: "shell-content",
                    {children}
                }
            }
        }
    }
}
