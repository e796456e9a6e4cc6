use crate::domain::listing::Breakpoints;
use gloo::events::EventListener;
use leptos::*;

/// Width assumed when no window is available.
const FALLBACK_WIDTH_PX: f64 = 1280.0;

pub fn window_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(FALLBACK_WIDTH_PX)
}

/// Reactive window width, updated on `resize` for the owner's lifetime.
pub fn use_window_width() -> ReadSignal<f64> {
    let (width, set_width) = create_signal(window_width());
    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "resize", move |_| {
            set_width.set(window_width());
        });
        on_cleanup(move || drop(listener));
    }
    width
}

/// Breakpoint flags following the window width.
pub fn use_breakpoints() -> Signal<Breakpoints> {
    let width = use_window_width();
    Signal::derive(move || Breakpoints::from_width(width.get()))
}
