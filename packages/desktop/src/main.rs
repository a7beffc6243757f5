use dioxus::prelude::*;
use ui::views::{DashboardView, EmployeeListView, LoginView, ShellView};
use ui::{use_auth, NavItem};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/employees")]
        Employees {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const EMS_TOML: &str = include_str!("../../../Ems.toml");

fn main() {
    let _ = dioxus::logger::init(dioxus::logger::tracing::Level::INFO);
    tracing::info!(data_dir = ?ui::make_backend().base(), "employee data location");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| store::EmsConfig::load_or_default(EMS_TOML));

    rsx! {
        document::Title { "EMS Pro" }
        document::Link { rel: "stylesheet", href: ui::EMS_CSS }

        ui::AuthProvider {
            ui::DirectoryProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth.is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}

#[component]
fn Shell() -> Element {
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

#[component]
fn Dashboard() -> Element {
    rsx! {
        DashboardView {}
    }
}

#[component]
fn Employees() -> Element {
    rsx! {
        EmployeeListView {}
    }
}

/// Unknown paths land on the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown route, redirecting");
    nav.replace(Route::Dashboard {});
    rsx! {}
}
