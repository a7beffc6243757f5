use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight, FaGaugeHigh, FaRightFromBracket, FaUsers};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Primary navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Employees,
}

impl NavItem {
    pub const ALL: [NavItem; 2] = [NavItem::Dashboard, NavItem::Employees];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Employees => "Employees",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::Employees => "/employees",
        }
    }
}

/// Collapsible navigation rail. Collapsed, it shows icons only and labels as hover
/// tooltips; on narrow screens an open sidebar also renders a dismissing backdrop.
#[component]
pub fn AppSidebar(
    open: bool,
    active: NavItem,
    on_navigate: EventHandler<NavItem>,
    on_toggle: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let state = if open { "open" } else { "collapsed" };

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        if open {
            div {
                class: "sidebar-backdrop no-print",
                onclick: move |_| on_toggle.call(()),
            }
        }

        aside {
            class: "sidebar no-print {state}",

            div {
                class: "sidebar-brand",
                div {
                    class: "sidebar-brand-mark",
                    Icon { icon: FaUsers, width: 18, height: 18 }
                }
                if open {
                    span { class: "sidebar-brand-name", "EMS Pro" }
                }
            }

            nav {
                class: "sidebar-nav",
                for item in NavItem::ALL {
                    button {
                        key: "{item.path()}",
                        class: if item == active { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(item),
                        NavIcon { item }
                        if open {
                            span { "{item.label()}" }
                        } else {
                            span { class: "sidebar-tooltip", "{item.label()}" }
                        }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-item logout",
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 18, height: 18 }
                    if open {
                        span { "Log Out" }
                    } else {
                        span { class: "sidebar-tooltip", "Log Out" }
                    }
                }
                button {
                    class: "sidebar-collapse",
                    title: if open { "Collapse sidebar" } else { "Expand sidebar" },
                    onclick: move |_| on_toggle.call(()),
                    if open {
                        Icon { icon: FaChevronLeft, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaChevronRight, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Dashboard => rsx! { Icon { icon: FaGaugeHigh, width: 18, height: 18 } },
        NavItem::Employees => rsx! { Icon { icon: FaUsers, width: 18, height: 18 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_map_to_paths() {
        let paths: Vec<_> = NavItem::ALL.iter().map(|i| i.path()).collect();
        assert_eq!(paths, vec!["/", "/employees"]);
        assert_eq!(NavItem::Employees.label(), "Employees");
    }
}
