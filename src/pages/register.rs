//! Registration Page

use leptos::*;
use std::rc::Rc;

use crate::api;
use crate::state::global::{AppState, ButtonStyle, ModalBody, ModalButton, View};

/// Account registration page
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_value = full_name.get();
        let email_value = email.get();
        let password_value = password.get();

        set_submitting.set(true);
        spawn_local(async move {
            let created =
                api::register(&state, &name_value, &email_value, &password_value).await;
            if created.is_ok() {
                state.show_modal(
                    "Registration Successful",
                    ModalBody::Message(
                        "Your account has been created. You can now sign in.".to_string(),
                    ),
                    vec![ModalButton {
                        label: "Go to Login".to_string(),
                        style: ButtonStyle::Primary,
                        on_click: Rc::new(move || {
                            state.hide_modal();
                            state.view.set(View::Login);
                        }),
                    }],
                );
                set_full_name.set(String::new());
                set_email.set(String::new());
                set_password.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 mt-12">
            <h1 class="text-2xl font-bold mb-6">"Create an Account"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Full Name"</label>
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>

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
                    class="w-full bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-4">
                "Already have an account? "
                <button
                    on:click=move |_| state.view.set(View::Login)
                    class="text-blue-400 hover:underline"
                >
                    "Sign in"
                </button>
            </p>
        </div>
    }
}
