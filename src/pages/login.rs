//! Login Page

use leptos::*;

use crate::api;
use crate::state::global::{landing_view, AppState, View};
use crate::state::session::Session;

/// Login form page
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get();
        let password_value = password.get();

        set_submitting.set(true);
        spawn_local(async move {
            match api::login(&state, &email_value, &password_value).await {
                Ok(response) => {
                    let session = Session::from_token(response.token);
                    let next = landing_view(Some(&session));
                    state.login(session);
                    state.view.set(next);
                    set_email.set(String::new());
                    set_password.set(String::new());
                }
                Err(_) => {
                    // already surfaced by the client's error dialog
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 mt-12">
            <h1 class="text-2xl font-bold mb-6">"Sign In"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-4">
                "No account yet? "
                <button
                    on:click=move |_| state.view.set(View::Register)
                    class="text-blue-400 hover:underline"
                >
                    "Register here"
                </button>
            </p>
        </div>
    }
}
