//! Navigation Component
//!
//! Header navigation bar. The links derive from the current session: login
//! and registration while signed out, the panels and logout once signed in,
//! with the admin panel only offered to administrators.

use leptos::*;

use crate::state::global::{AppState, View};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🏥"</span>
                        <span class="text-xl font-bold text-white">"Clinica Portal"</span>
                    </div>

                    // Links derived from session state
                    <div class="flex items-center space-x-1">
                        {move || match state.session.get() {
                            None => view! {
                                <NavButton label="Login" on_click=move |_| state.view.set(View::Login) />
                                <button
                                    on:click=move |_| state.view.set(View::Register)
                                    class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg
                                           font-medium transition-colors"
                                >
                                    "Register"
                                </button>
                            }.into_view(),
                            Some(session) => view! {
                                {session.is_admin().then(|| view! {
                                    <NavButton
                                        label="Admin Panel"
                                        on_click=move |_| state.view.set(View::Admin)
                                    />
                                })}
                                <NavButton
                                    label="My Panel"
                                    on_click=move |_| state.view.set(View::Dashboard)
                                />
                                <button
                                    on:click=move |_| state.logout()
                                    class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg
                                           font-medium transition-colors"
                                >
                                    "Log Out"
                                </button>
                            }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavButton(
    label: &'static str,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700
                   transition-colors"
        >
            {label}
        </button>
    }
}
