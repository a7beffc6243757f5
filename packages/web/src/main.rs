use dioxus::prelude::*;

use views::{Dashboard, Employees, Login, NotFound, Shell};

mod views;

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
