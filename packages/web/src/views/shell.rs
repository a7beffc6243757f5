use dioxus::prelude::*;
use ui::views::ShellView;
use ui::{use_auth, NavItem};

use crate::Route;

/// Layout for every signed-in route. Without a session it redirects to `/login`.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    if !auth.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let active = match route {
        Route::Employees {} => NavItem::Employees,
        _ => NavItem::Dashboard,
    };

    rsx! {
        ShellView {
            active,
            on_navigate: move |item: NavItem| {
                let target = match item {
                    NavItem::Dashboard => Route::Dashboard {},
                    NavItem::Employees => Route::Employees {},
                };
                nav.push(target);
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
