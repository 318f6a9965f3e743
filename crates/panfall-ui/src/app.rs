//! Demo application shell.
//!
//! Feeds the Panfall display from the mock generator; a real
//! deployment replaces the mock interval with the receiver transport.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::*;

use panfall_core::{SpectrumFrame, WaterfallRow};

use crate::components::Panfall;
use crate::mock::{mock_row, mock_spectrum};

/// Mock frame cadence.
const MOCK_INTERVAL: Duration = Duration::from_millis(50);

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let (spectrum, set_spectrum) = create_signal::<Option<SpectrumFrame>>(None);
    let (row, set_row) = create_signal::<Option<WaterfallRow>>(None);

    let tick = store_value(0u32);
    let interval = set_interval_with_handle(
        move || {
            let t = tick.get_value();
            tick.set_value(t.wrapping_add(1));
            set_spectrum.set(Some(mock_spectrum(t)));
            set_row.set(Some(mock_row(t)));
        },
        MOCK_INTERVAL,
    );
    match interval {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => web_sys::console::error_1(&format!("mock interval error: {:?}", e).into()),
    }

    view! {
        <main class="panfall-app">
            <header class="app-header">
                <h1>"Panfall"</h1>
            </header>
            <Panfall width=2048 height=256 spectrum=spectrum row=row />
        </main>
    }
}

/// Mount the application into the document body (CSR entry point).
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
