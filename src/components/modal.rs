//! Modal Dialog Component
//!
//! One reusable overlay hosting messages, confirmations, and the doctor
//! form. Content lives in [`AppState::modal`]; opening a new dialog while
//! another is visible overwrites it without queuing.

use leptos::*;
use std::rc::Rc;

use crate::components::DoctorForm;
use crate::state::global::{AppState, ButtonStyle, ModalAction, ModalBody, ModalButton, ModalState};

/// Modal container; renders nothing while no dialog is requested.
#[component]
pub fn Modal() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            state.modal.get().map(|modal| view! { <ModalCard modal=modal /> })
        }}
    }
}

/// Footer actions for the current modal. A message body with no explicit
/// actions gets the default close button; form bodies bring their own.
fn footer_buttons(modal: &ModalState, close: ModalAction) -> Vec<ModalButton> {
    if modal.buttons.is_empty() && matches!(modal.body, ModalBody::Message(_)) {
        vec![ModalButton {
            label: "Close".to_string(),
            style: ButtonStyle::Neutral,
            on_click: close,
        }]
    } else {
        modal.buttons.clone()
    }
}

#[component]
fn ModalCard(modal: ModalState) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let card_class = move || {
        let base = "bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4 transform \
                    transition-all duration-300";
        if state.modal_entered.get() {
            format!("{base} scale-100 opacity-100")
        } else {
            format!("{base} scale-95 opacity-0")
        }
    };

    let buttons = footer_buttons(&modal, Rc::new(move || state.hide_modal()));

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class=card_class>
                <h2 class="text-xl font-semibold mb-4">{modal.title.clone()}</h2>

                <div class="mb-6">
                    {match modal.body.clone() {
                        ModalBody::Message(text) => view! {
                            <p class="text-gray-300">{text}</p>
                        }.into_view(),
                        ModalBody::DoctorEditor { doctor, on_saved } => view! {
                            <DoctorForm doctor=doctor on_saved=on_saved />
                        }.into_view(),
                    }}
                </div>

                <div class="flex justify-end space-x-3">
                    {buttons.into_iter().map(|button| {
                        let ModalButton { label, style, on_click } = button;
                        view! {
                            <button
                                on:click=move |_| on_click()
                                class=style.classes()
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_modal(buttons: Vec<ModalButton>) -> ModalState {
        ModalState {
            title: "Notice".to_string(),
            body: ModalBody::Message("hello".to_string()),
            buttons,
        }
    }

    #[test]
    fn message_without_actions_gets_default_close() {
        let buttons = footer_buttons(&message_modal(Vec::new()), Rc::new(|| {}));
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].label, "Close");
        assert_eq!(buttons[0].style, ButtonStyle::Neutral);
    }

    #[test]
    fn explicit_actions_are_kept_as_given() {
        let delete = ModalButton {
            label: "Delete".to_string(),
            style: ButtonStyle::Danger,
            on_click: Rc::new(|| {}),
        };
        let buttons = footer_buttons(&message_modal(vec![delete]), Rc::new(|| {}));
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].label, "Delete");
        assert_eq!(buttons[0].style, ButtonStyle::Danger);
    }

    #[test]
    fn form_bodies_bring_their_own_actions() {
        let modal = ModalState {
            title: "Edit Doctor".to_string(),
            body: ModalBody::DoctorEditor {
                doctor: None,
                on_saved: Rc::new(|| {}),
            },
            buttons: Vec::new(),
        };
        assert!(footer_buttons(&modal, Rc::new(|| {})).is_empty());
    }
}
