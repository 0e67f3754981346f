//! Loading Component
//!
//! Loading spinners and the global busy overlay.

use leptos::*;

use crate::state::global::AppState;

/// Inline loading spinner for section content
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Fullscreen overlay shown while any API request is outstanding.
#[component]
pub fn BusyOverlay() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            if state.is_busy() {
                view! {
                    <div class="fixed inset-0 bg-gray-900/60 flex items-center justify-center z-40">
                        <div class="loading-spinner w-10 h-10" />
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
