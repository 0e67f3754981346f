//! Dashboard Page
//!
//! Patient view: own appointments, pending studies, and appointment
//! scheduling. The three sections load independently and write to disjoint
//! signals, so their requests are free to race.

use leptos::*;

use crate::api;
use crate::api::client::{Appointment, AppointmentRequest, Doctor};
use crate::components::Loading;
use crate::state::global::AppState;

/// Patient dashboard page
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    // `None` means not loaded yet; failures flip the dedicated flag.
    let (appointments, set_appointments) = create_signal(None::<Vec<Appointment>>);
    let (appointments_failed, set_appointments_failed) = create_signal(false);
    let (doctors, set_doctors) = create_signal(Vec::<Doctor>::new());
    let (doctors_failed, set_doctors_failed) = create_signal(false);

    let load_appointments = move || {
        spawn_local(async move {
            match api::fetch_my_appointments(&state).await {
                Ok(list) => {
                    set_appointments_failed.set(false);
                    set_appointments.set(Some(list));
                }
                Err(_) => set_appointments_failed.set(true),
            }
        });
    };

    let load_doctors = move || {
        spawn_local(async move {
            match api::fetch_doctors(&state).await {
                Ok(list) => {
                    set_doctors_failed.set(false);
                    set_doctors.set(list);
                }
                Err(_) => set_doctors_failed.set(true),
            }
        });
    };

    // Fetch initial data on mount
    create_effect(move |_| {
        load_appointments();
        load_doctors();
    });

    // Appointment form
    let (doctor_id, set_doctor_id) = create_signal(String::new());
    let (date_time, set_date_time) = create_signal(String::new());
    let (reason, set_reason) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // No request leaves the page until every field is filled in.
        let request =
            match validate_appointment(&doctor_id.get(), &date_time.get(), &reason.get()) {
                Ok(request) => request,
                Err(message) => {
                    state.show_message("Incomplete Fields", message);
                    return;
                }
            };

        set_submitting.set(true);
        spawn_local(async move {
            if api::schedule_appointment(&state, &request).await.is_ok() {
                state.show_message("Success", "Your appointment has been scheduled.");
                set_doctor_id.set(String::new());
                set_date_time.set(String::new());
                set_reason.set(String::new());
                load_appointments();
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"My Panel"</h1>
                <p class="text-gray-400 mt-1">"Your appointments at a glance"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                // Own appointments
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"My Appointments"</h2>

                    {move || {
                        if appointments_failed.get() {
                            return view! {
                                <p class="text-red-400 text-sm">
                                    "Your appointments could not be loaded."
                                </p>
                            }.into_view();
                        }
                        match appointments.get() {
                            None => view! { <Loading /> }.into_view(),
                            Some(list) if list.is_empty() => view! {
                                <p class="text-gray-400 text-sm">
                                    "You have no scheduled appointments."
                                </p>
                            }.into_view(),
                            Some(list) => list.into_iter().map(|appointment| view! {
                                <AppointmentRow appointment=appointment />
                            }).collect_view(),
                        }
                    }}
                </section>

                // Studies placeholder; the backend does not expose these yet
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"My Studies"</h2>
                    <p class="text-gray-400 text-sm">
                        "Study results are not available in this version."
                    </p>
                </section>
            </div>

            // Scheduling form
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Schedule an Appointment"</h2>

                <form on:submit=on_submit class="space-y-4">
                    // Doctor selector
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Doctor"</label>
                        <select
                            on:change=move |ev| set_doctor_id.set(event_target_value(&ev))
                            prop:value=move || doctor_id.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-blue-500 focus:outline-none"
                        >
                            <option value="" disabled=true>"Select a doctor"</option>
                            {move || {
                                if doctors_failed.get() {
                                    view! {
                                        <option value="" disabled=true>
                                            "Doctors could not be loaded"
                                        </option>
                                    }.into_view()
                                } else {
                                    doctors.get().into_iter().map(|doctor| view! {
                                        <option value=doctor.id.to_string()>
                                            {format!("{} - {}", doctor.full_name, doctor.specialty)}
                                        </option>
                                    }).collect_view()
                                }
                            }}
                        </select>
                    </div>

                    // Date and time
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Date and Time"</label>
                        <input
                            type="datetime-local"
                            prop:value=move || date_time.get()
                            on:input=move |ev| set_date_time.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    // Reason
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Reason"</label>
                        <textarea
                            prop:value=move || reason.get()
                            on:input=move |ev| set_reason.set(event_target_value(&ev))
                            rows=3
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
                        {move || if submitting.get() { "Scheduling..." } else { "Schedule" }}
                    </button>
                </form>
            </section>
        </div>
    }
}

/// Single appointment entry
#[component]
fn AppointmentRow(appointment: Appointment) -> impl IntoView {
    view! {
        <div class="border-b border-gray-700 py-3 last:border-0">
            <p class="font-semibold">{appointment.reason.clone()}</p>
            <p class="text-sm text-gray-400">
                {format!(
                    "Dr. {} ({})",
                    appointment.doctor_name, appointment.doctor_specialty
                )}
            </p>
            <p class="text-sm text-gray-400">{format_date_time(&appointment.date_time)}</p>
        </div>
    }
}

/// Client-side check run before any network call.
fn validate_appointment(
    doctor_id: &str,
    date_time: &str,
    reason: &str,
) -> Result<AppointmentRequest, &'static str> {
    const INCOMPLETE: &str = "Please fill in every field.";

    if doctor_id.is_empty() || date_time.is_empty() || reason.is_empty() {
        return Err(INCOMPLETE);
    }
    let doctor_id: i64 = doctor_id.parse().map_err(|_| INCOMPLETE)?;

    Ok(AppointmentRequest {
        doctor_id,
        date_time: date_time.to_string(),
        reason: reason.to_string(),
    })
}

/// Render a backend timestamp for the appointment list. Accepts RFC 3339
/// and the bare `datetime-local` shapes; anything else passes through.
fn format_date_time(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d/%m/%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, pattern) {
            return parsed.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_never_build_a_request() {
        assert!(validate_appointment("", "2026-08-07T10:30", "Checkup").is_err());
        assert!(validate_appointment("3", "", "Checkup").is_err());
        assert!(validate_appointment("3", "2026-08-07T10:30", "").is_err());
        assert!(validate_appointment("", "", "").is_err());
    }

    #[test]
    fn non_numeric_doctor_ids_are_rejected() {
        assert!(validate_appointment("abc", "2026-08-07T10:30", "Checkup").is_err());
    }

    #[test]
    fn complete_fields_build_the_request() {
        let request = validate_appointment("3", "2026-08-07T10:30", "Checkup").unwrap();
        assert_eq!(request.doctor_id, 3);
        assert_eq!(request.date_time, "2026-08-07T10:30");
        assert_eq!(request.reason, "Checkup");
    }

    #[test]
    fn date_time_shapes_render_for_display() {
        assert_eq!(format_date_time("2026-08-07T10:30"), "07/08/2026 10:30");
        assert_eq!(format_date_time("2026-08-07T10:30:00"), "07/08/2026 10:30");
        assert_eq!(
            format_date_time("2026-08-07T10:30:00+00:00"),
            "07/08/2026 10:30"
        );
        // Unparseable values pass through untouched.
        assert_eq!(format_date_time("whenever"), "whenever");
    }
}
