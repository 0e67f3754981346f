//! UI Components
//!
//! Reusable Leptos components for the portal.

pub mod doctor_form;
pub mod loading;
pub mod modal;
pub mod nav;

pub use doctor_form::DoctorForm;
pub use loading::{BusyOverlay, Loading};
pub use modal::Modal;
pub use nav::Nav;
