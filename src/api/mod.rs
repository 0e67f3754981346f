//! HTTP API
//!
//! Typed endpoint functions over the clinic REST backend.

pub mod client;

pub use client::{
    create_doctor, delete_doctor, fetch_doctors, fetch_my_appointments, grant_admin, login,
    register, schedule_appointment, update_doctor,
};
