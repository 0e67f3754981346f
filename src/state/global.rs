//! Global Application State
//!
//! Reactive state shared by every view: the session, the active view, the
//! in-flight request counter, and the modal dialog content.

use leptos::*;
use std::rc::Rc;

use super::session::{self, Session};
use crate::api::client::Doctor;

/// Top-level views. Exactly one is rendered at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Dashboard,
    Admin,
}

/// Landing view for a (possibly absent) session.
pub fn landing_view(session: Option<&Session>) -> View {
    match session {
        Some(session) if session.is_admin() => View::Admin,
        Some(_) => View::Dashboard,
        None => View::Login,
    }
}

/// Click handler stored inside modal content.
pub type ModalAction = Rc<dyn Fn()>;

/// Visual weight of a modal footer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Danger,
    Neutral,
}

impl ButtonStyle {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonStyle::Primary => {
                "px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            }
            ButtonStyle::Danger => {
                "px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
            }
            ButtonStyle::Neutral => {
                "px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
            }
        }
    }
}

/// A footer action for the modal dialog.
#[derive(Clone)]
pub struct ModalButton {
    pub label: String,
    pub style: ButtonStyle,
    pub on_click: ModalAction,
}

/// Structured modal content; the modal component renders each variant.
#[derive(Clone)]
pub enum ModalBody {
    /// Plain text, wrapped in a paragraph
    Message(String),
    /// Doctor create/edit form; `on_saved` runs after a successful save
    DoctorEditor {
        doctor: Option<Doctor>,
        on_saved: ModalAction,
    },
}

/// One modal request. A new request overwrites the previous one.
#[derive(Clone)]
pub struct ModalState {
    pub title: String,
    pub body: ModalBody,
    pub buttons: Vec<ModalButton>,
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current authenticated identity, if any
    pub session: RwSignal<Option<Session>>,
    /// Active top-level view
    pub view: RwSignal<View>,
    /// API requests in flight; the busy overlay shows above zero
    pub pending: RwSignal<u32>,
    /// Active modal dialog content
    pub modal: RwSignal<Option<ModalState>>,
    /// Whether the open transition has run; drives the CSS animation
    pub modal_entered: RwSignal<bool>,
}

/// Provide global state to the component tree, restoring any persisted
/// session so a reload keeps the user signed in.
pub fn provide_app_state() {
    let restored = session::restore();
    let view = landing_view(restored.as_ref());

    let state = AppState {
        session: create_rw_signal(restored),
        view: create_rw_signal(view),
        pending: create_rw_signal(0),
        modal: create_rw_signal(None),
        modal_entered: create_rw_signal(false),
    };

    provide_context(state);
}

impl AppState {
    /// How long the modal's CSS transition runs, in milliseconds.
    const MODAL_TRANSITION_MS: u32 = 300;

    pub fn is_busy(&self) -> bool {
        self.pending.get() > 0
    }

    /// Mark one API request in flight.
    pub fn begin_request(&self) {
        self.pending.update(|count| *count += 1);
    }

    /// Settle one API request. The overlay hides only once every
    /// outstanding request has settled.
    pub fn end_request(&self) {
        self.pending.update(|count| *count = count.saturating_sub(1));
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .with(|session| session.as_ref().map(|s| s.token.clone()))
    }

    /// Store a fresh session and persist it for the next page load.
    pub fn login(&self, session: Session) {
        session::persist(&session);
        self.session.set(Some(session));
    }

    /// Drop the session, wipe storage, and return to the login view.
    pub fn logout(&self) {
        session::clear_storage();
        self.session.set(None);
        self.view.set(View::Login);
    }

    /// Replace the modal content and run the open transition.
    pub fn show_modal(
        &self,
        title: impl Into<String>,
        body: ModalBody,
        buttons: Vec<ModalButton>,
    ) {
        self.modal.set(Some(ModalState {
            title: title.into(),
            body,
            buttons,
        }));
        self.modal_entered.set(false);

        // Let the browser paint the hidden state first, then animate in.
        let entered = self.modal_entered;
        gloo_timers::callback::Timeout::new(10, move || entered.set(true)).forget();
    }

    /// Plain text dialog with the default close button.
    pub fn show_message(&self, title: impl Into<String>, text: impl Into<String>) {
        self.show_modal(title, ModalBody::Message(text.into()), Vec::new());
    }

    /// Confirmation dialog: cancel plus a destructive confirm action.
    pub fn show_confirm(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        confirm_label: impl Into<String>,
        on_confirm: ModalAction,
    ) {
        let state = *self;
        let buttons = vec![
            ModalButton {
                label: "Cancel".to_string(),
                style: ButtonStyle::Neutral,
                on_click: Rc::new(move || state.hide_modal()),
            },
            ModalButton {
                label: confirm_label.into(),
                style: ButtonStyle::Danger,
                on_click: on_confirm,
            },
        ];
        self.show_modal(title, ModalBody::Message(text.into()), buttons);
    }

    /// Reverse the transition, then remove the dialog once it finishes.
    pub fn hide_modal(&self) {
        self.modal_entered.set(false);

        let modal = self.modal;
        gloo_timers::callback::Timeout::new(Self::MODAL_TRANSITION_MS, move || modal.set(None))
            .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;

    #[test]
    fn landing_view_depends_on_role() {
        assert_eq!(landing_view(None), View::Login);

        let admin = Session {
            token: "t".to_string(),
            role: Some(Role::Admin),
        };
        assert_eq!(landing_view(Some(&admin)), View::Admin);

        let patient = Session {
            token: "t".to_string(),
            role: Some(Role::User),
        };
        assert_eq!(landing_view(Some(&patient)), View::Dashboard);

        // A token without a decodable role still lands on the dashboard.
        let no_role = Session {
            token: "t".to_string(),
            role: None,
        };
        assert_eq!(landing_view(Some(&no_role)), View::Dashboard);
    }
}
