//! Clinica Portal
//!
//! Single-page front end for a clinic-management application, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Patient login and registration
//! - Patient dashboard: own appointments and scheduling
//! - Admin panel: doctor administration and role grants
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic and persistence live in the clinic REST
//! backend; this crate is the view/controller layer on top of it.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
