use dioxus::prelude::*;

use crate::Route;

/// Any unknown path lands on the dashboard, which itself requires a session.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown route, redirecting");
    nav.replace(Route::Dashboard {});
    rsx! {}
}
