//! App Root Component
//!
//! Global providers, navigation, view switching, and the shared overlays.

use leptos::*;

use crate::components::{BusyOverlay, Modal, Nav};
use crate::pages::{Admin, Dashboard, Login, Register};
use crate::state::global::{provide_app_state, AppState, View};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components, restoring any persisted
    // session so a reload lands on the right view.
    provide_app_state();

    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Active view
            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match state.view.get() {
                    View::Login => view! { <Login /> }.into_view(),
                    View::Register => view! { <Register /> }.into_view(),
                    View::Dashboard => view! { <Dashboard /> }.into_view(),
                    View::Admin => view! { <Admin /> }.into_view(),
                }}
            </main>

            // Request-in-flight overlay
            <BusyOverlay />

            // Shared modal dialog
            <Modal />
        </div>
    }
}
