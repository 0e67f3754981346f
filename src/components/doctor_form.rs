//! Doctor Form Component
//!
//! Create/edit form hosted by the modal dialog. Saving picks PUT when an
//! existing doctor was supplied and POST otherwise.

use leptos::*;

use crate::api;
use crate::api::client::{Doctor, DoctorPayload, Specialty};
use crate::state::global::{AppState, ModalAction};

/// Doctor create/edit form
#[component]
pub fn DoctorForm(doctor: Option<Doctor>, on_saved: ModalAction) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let doctor_id = doctor.as_ref().map(|d| d.id);
    let (full_name, set_full_name) = create_signal(
        doctor
            .as_ref()
            .map(|d| d.full_name.clone())
            .unwrap_or_default(),
    );
    let (specialty, set_specialty) =
        create_signal(doctor.as_ref().map(|d| d.specialty).unwrap_or_default());
    let (submitting, set_submitting) = create_signal(false);
    let (form_error, set_form_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = full_name.get();
        if name.trim().is_empty() {
            set_form_error.set(Some("The full name is required.".to_string()));
            return;
        }

        let payload = DoctorPayload {
            full_name: name.trim().to_string(),
            specialty: specialty.get(),
        };

        set_submitting.set(true);
        let on_saved = on_saved.clone();
        spawn_local(async move {
            let saved = match doctor_id {
                Some(id) => api::update_doctor(&state, id, &payload).await.map(|_| ()),
                None => api::create_doctor(&state, &payload).await.map(|_| ()),
            };
            if saved.is_ok() {
                state.hide_modal();
                on_saved();
            }
            // On failure the client has already replaced this dialog with
            // the error dialog.
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Full name
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

            // Specialty
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Specialty"</label>
                <select
                    on:change=move |ev| {
                        if let Some(selected) = Specialty::from_wire(&event_target_value(&ev)) {
                            set_specialty.set(selected);
                        }
                    }
                    prop:value=move || specialty.get().wire().to_string()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-blue-500 focus:outline-none"
                >
                    {Specialty::ALL.into_iter().map(|option| view! {
                        <option value=option.wire()>{option.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            // Local validation error
            {move || form_error.get().map(|message| view! {
                <p class="text-red-400 text-sm">{message}</p>
            })}

            // Actions
            <div class="flex justify-end space-x-3 pt-2">
                <button
                    type="button"
                    on:click=move |_| state.hide_modal()
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg
                           font-medium transition-colors"
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
