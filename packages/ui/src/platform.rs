//! Small platform shims: timers, printing and viewport size.

use std::time::Duration;

use chrono::NaiveDateTime;
use dioxus::prelude::*;

/// Viewport width above which the sidebar starts expanded.
#[cfg(target_arch = "wasm32")]
const WIDE_VIEWPORT_PX: f64 = 1024.0;

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Open the print dialog for the current page.
pub fn print_page() {
    tracing::info!("opening print dialog");
    let _ = document::eval("window.print();");
}

/// Local wall-clock time, used for ages and report timestamps.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn is_wide_viewport() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map_or(true, |width| width > WIDE_VIEWPORT_PX)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}
