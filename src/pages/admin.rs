//! Admin Page
//!
//! Doctor administration (list, create, edit, delete) and role grants.

use leptos::*;
use std::rc::Rc;

use crate::api;
use crate::api::client::Doctor;
use crate::components::Loading;
use crate::state::global::{AppState, ModalBody};

/// Admin panel page
#[component]
pub fn Admin() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (doctors, set_doctors) = create_signal(None::<Vec<Doctor>>);
    let (load_failed, set_load_failed) = create_signal(false);

    let load_doctors = move || {
        spawn_local(async move {
            match api::fetch_doctors(&state).await {
                Ok(list) => {
                    set_load_failed.set(false);
                    set_doctors.set(Some(list));
                }
                Err(_) => set_load_failed.set(true),
            }
        });
    };

    // Fetch the doctor list on mount
    create_effect(move |_| load_doctors());

    // The same form serves create and edit; the save path picks PUT when
    // an existing doctor is supplied.
    let open_editor = move |doctor: Option<Doctor>| {
        let title = if doctor.is_some() {
            "Edit Doctor"
        } else {
            "Add New Doctor"
        };
        state.show_modal(
            title,
            ModalBody::DoctorEditor {
                doctor,
                on_saved: Rc::new(move || load_doctors()),
            },
            Vec::new(),
        );
    };

    let confirm_delete = move |id: i64| {
        state.show_confirm(
            "Confirm Deletion",
            format!("Delete the doctor with ID {id}? This action cannot be undone."),
            "Delete",
            Rc::new(move || {
                spawn_local(async move {
                    if api::delete_doctor(&state, id).await.is_ok() {
                        state.hide_modal();
                        load_doctors();
                    }
                });
            }),
        );
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Admin Panel"</h1>
                    <p class="text-gray-400 mt-1">"Manage the clinic's doctors"</p>
                </div>

                <button
                    on:click=move |_| open_editor(None)
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg
                           font-medium transition-colors"
                >
                    "+ Add Doctor"
                </button>
            </div>

            // Doctor table
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Doctors"</h2>

                {move || {
                    if load_failed.get() {
                        return view! {
                            <p class="text-red-400 text-sm">"The doctors could not be loaded."</p>
                        }.into_view();
                    }
                    match doctors.get() {
                        None => view! { <Loading /> }.into_view(),
                        Some(list) if list.is_empty() => view! {
                            <p class="text-gray-400 text-sm">"No doctors registered."</p>
                        }.into_view(),
                        Some(list) => view! {
                            <table class="w-full text-left">
                                <thead>
                                    <tr class="text-gray-400 text-sm border-b border-gray-700">
                                        <th class="py-2">"ID"</th>
                                        <th class="py-2">"Full Name"</th>
                                        <th class="py-2">"Specialty"</th>
                                        <th class="py-2 text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list.into_iter().map(|doctor| {
                                        view! { <DoctorRow
                                            doctor=doctor
                                            on_edit=open_editor
                                            on_delete=confirm_delete
                                        /> }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view(),
                    }
                }}
            </section>

            // Role grants
            <GrantAdminForm />
        </div>
    }
}

/// Single doctor table row with inline actions
#[component]
fn DoctorRow(
    doctor: Doctor,
    on_edit: impl Fn(Option<Doctor>) + Copy + 'static,
    on_delete: impl Fn(i64) + Copy + 'static,
) -> impl IntoView {
    let id = doctor.id;
    let edit_target = doctor.clone();

    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="py-2">{doctor.id}</td>
            <td class="py-2">{doctor.full_name.clone()}</td>
            <td class="py-2">{doctor.specialty.label()}</td>
            <td class="py-2 text-right space-x-2">
                <button
                    on:click=move |_| on_edit(Some(edit_target.clone()))
                    class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded text-sm
                           transition-colors"
                >
                    "Edit"
                </button>
                <button
                    on:click=move |_| on_delete(id)
                    class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm
                           transition-colors"
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Form granting the admin role to a user by id
#[component]
fn GrantAdminForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (user_id, set_user_id) = create_signal(String::new());
    let (granting, set_granting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let id_value = user_id.get();
        if id_value.is_empty() {
            state.show_message("Error", "A user ID is required.");
            return;
        }

        set_granting.set(true);
        spawn_local(async move {
            if api::grant_admin(&state, &id_value).await.is_ok() {
                state.show_message(
                    "Success",
                    format!("Admin role granted to the user with ID {id_value}."),
                );
                set_user_id.set(String::new());
            }
            set_granting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Grant Admin Role"</h2>

            <form on:submit=on_submit class="flex items-end space-x-3">
                <div class="flex-1">
                    <label class="block text-sm text-gray-400 mb-2">"User ID"</label>
                    <input
                        type="text"
                        prop:value=move || user_id.get()
                        on:input=move |ev| set_user_id.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || granting.get()
                    class="px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if granting.get() { "Granting..." } else { "Grant" }}
                </button>
            </form>
        </section>
    }
}
