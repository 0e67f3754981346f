//! State Management
//!
//! Global reactive state and the persisted session.

pub mod global;
pub mod session;

pub use global::{provide_app_state, AppState, View};
pub use session::{Role, Session};
