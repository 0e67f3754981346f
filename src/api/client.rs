//! HTTP API Client
//!
//! Functions for communicating with the clinic REST API. Every call shares
//! the same request discipline: JSON bodies, a bearer credential when a
//! session exists, the global busy counter held for the whole call, and one
//! error dialog for any failure.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::state::global::AppState;

/// Default backend origin
pub const DEFAULT_API_BASE: &str = "https://clinicapi-back-production.up.railway.app";

/// Local storage key overriding the backend origin, for local testing
const API_BASE_KEY: &str = "clinica_api_url";

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

fn url(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

/// Failure surfaced by every endpoint function. The error dialog has
/// already been shown by the time a caller sees this; matching on it only
/// decides whether follow-up rendering runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-success HTTP status, message derived from the backend payload
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a usable response
    #[error("{0}")]
    Network(String),
}

// ============ Request / Response Types ============

/// Token issued by `POST /auth/login`
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Fixed set of clinic specialties, as the backend names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Specialty {
    #[default]
    #[serde(rename = "CARDIOLOGIA")]
    Cardiology,
    #[serde(rename = "TRAUMATOLOGIA")]
    Traumatology,
    #[serde(rename = "PEDIATRIA")]
    Pediatrics,
    #[serde(rename = "RADIOLOGIA")]
    Radiology,
    #[serde(rename = "LABORATORIO")]
    Laboratory,
}

impl Specialty {
    /// Every selectable specialty, in display order.
    pub const ALL: [Specialty; 5] = [
        Specialty::Cardiology,
        Specialty::Traumatology,
        Specialty::Pediatrics,
        Specialty::Radiology,
        Specialty::Laboratory,
    ];

    /// Backend wire value
    pub fn wire(self) -> &'static str {
        match self {
            Specialty::Cardiology => "CARDIOLOGIA",
            Specialty::Traumatology => "TRAUMATOLOGIA",
            Specialty::Pediatrics => "PEDIATRIA",
            Specialty::Radiology => "RADIOLOGIA",
            Specialty::Laboratory => "LABORATORIO",
        }
    }

    pub fn from_wire(value: &str) -> Option<Specialty> {
        Self::ALL.into_iter().find(|s| s.wire() == value)
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Specialty::Cardiology => "Cardiology",
            Specialty::Traumatology => "Traumatology",
            Specialty::Pediatrics => "Pediatrics",
            Specialty::Radiology => "Radiology",
            Specialty::Laboratory => "Laboratory",
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Doctor as returned by the admin listing
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub full_name: String,
    pub specialty: Specialty,
}

/// Write payload for creating or updating a doctor
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPayload {
    pub full_name: String,
    pub specialty: Specialty,
}

/// Appointment as returned by the "my appointments" listing
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub reason: String,
    pub doctor_name: String,
    pub doctor_specialty: Specialty,
    pub date_time: String,
}

/// Write payload for scheduling an appointment
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub doctor_id: i64,
    pub date_time: String,
    pub reason: String,
}

// ============ Request Core ============

/// Marker for endpoints that send no body.
const NO_BODY: Option<&serde_json::Value> = None;

/// Collapse a backend error payload into one displayable line. Validation
/// failures arrive as a flat object of field -> message; the values are
/// joined in order.
fn join_error_fields(body: &serde_json::Value) -> Option<String> {
    let fields = body.as_object()?;
    if fields.is_empty() {
        return None;
    }
    let joined = fields
        .values()
        .map(|value| match value {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(". ");
    Some(joined)
}

fn request_build_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("Request build error: {err}"))
}

/// Derive the display message for a failed response: the backend's joined
/// error fields, or the HTTP status text when the body is not usable.
async fn status_error(response: &Response) -> ApiError {
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => join_error_fields(&body).unwrap_or_else(|| response.status_text()),
        Err(_) => response.status_text(),
    };
    ApiError::Status {
        status: response.status(),
        message,
    }
}

async fn perform<T, B>(
    state: &AppState,
    builder: RequestBuilder,
    body: Option<&B>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
    B: Serialize + ?Sized,
{
    let mut builder = builder.header("Content-Type", "application/json");
    if let Some(token) = state.token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder.json(body).map_err(request_build_error)?,
        None => builder.build().map_err(request_build_error)?,
    };

    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(format!("Network error: {err}")))?;

    if !response.ok() {
        return Err(status_error(&response).await);
    }

    // Empty or non-JSON success bodies (e.g. DELETE) mean "no data".
    let declares_json = response
        .headers()
        .get("content-type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);
    if !declares_json {
        return Ok(T::default());
    }

    response
        .json()
        .await
        .map_err(|err| ApiError::Network(format!("Parse error: {err}")))
}

/// Issue one API call: busy counter held for the whole call, and a single
/// error dialog for any failure before it propagates to the caller.
async fn fetch_api<T, B>(
    state: &AppState,
    builder: RequestBuilder,
    body: Option<&B>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
    B: Serialize + ?Sized,
{
    state.begin_request();
    let result = perform(state, builder, body).await;
    state.end_request();

    if let Err(err) = &result {
        web_sys::console::error_1(&format!("API error: {err}").into());
        state.show_message("Connection Error", err.to_string());
    }

    result
}

// ============ API Functions ============

/// Sign in and obtain a bearer token
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    fetch_api(state, Request::post(&url("/auth/login")), Some(&body)).await
}

/// Create a new patient account
pub async fn register(
    state: &AppState,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let body = serde_json::json!({
        "fullName": full_name,
        "email": email,
        "password": password,
    });
    fetch_api::<serde_json::Value, _>(state, Request::post(&url("/auth/register")), Some(&body))
        .await?;
    Ok(())
}

/// Fetch the signed-in patient's appointments
pub async fn fetch_my_appointments(state: &AppState) -> Result<Vec<Appointment>, ApiError> {
    fetch_api(
        state,
        Request::get(&url("/api/consultas/mis-consultas")),
        NO_BODY,
    )
    .await
}

/// Schedule a new appointment
pub async fn schedule_appointment(
    state: &AppState,
    request: &AppointmentRequest,
) -> Result<(), ApiError> {
    fetch_api::<serde_json::Value, _>(
        state,
        Request::post(&url("/api/consultas/agendar")),
        Some(request),
    )
    .await?;
    Ok(())
}

/// Fetch all doctors
pub async fn fetch_doctors(state: &AppState) -> Result<Vec<Doctor>, ApiError> {
    fetch_api(state, Request::get(&url("/api/admin/doctores")), NO_BODY).await
}

/// Create a doctor
pub async fn create_doctor(state: &AppState, payload: &DoctorPayload) -> Result<Doctor, ApiError> {
    fetch_api(state, Request::post(&url("/api/admin/doctores")), Some(payload)).await
}

/// Update an existing doctor
pub async fn update_doctor(
    state: &AppState,
    id: i64,
    payload: &DoctorPayload,
) -> Result<Doctor, ApiError> {
    fetch_api(
        state,
        Request::put(&url(&format!("/api/admin/doctores/{id}"))),
        Some(payload),
    )
    .await
}

/// Delete a doctor
pub async fn delete_doctor(state: &AppState, id: i64) -> Result<(), ApiError> {
    fetch_api::<serde_json::Value, _>(
        state,
        Request::delete(&url(&format!("/api/admin/doctores/{id}"))),
        NO_BODY,
    )
    .await?;
    Ok(())
}

/// Grant the admin role to a user by id
pub async fn grant_admin(state: &AppState, user_id: &str) -> Result<(), ApiError> {
    fetch_api::<serde_json::Value, _>(
        state,
        Request::patch(&url(&format!("/api/admin/usuarios/{user_id}/grant-admin"))),
        NO_BODY,
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_fields_join_into_one_message() {
        let body = serde_json::json!({
            "email": "must be a valid address",
            "password": "too short",
        });
        let message = join_error_fields(&body).unwrap();
        assert!(message.contains("must be a valid address"));
        assert!(message.contains("too short"));
        assert!(message.contains(". "));
    }

    #[test]
    fn unusable_error_bodies_yield_nothing() {
        assert_eq!(join_error_fields(&serde_json::json!("boom")), None);
        assert_eq!(join_error_fields(&serde_json::json!(42)), None);
        assert_eq!(join_error_fields(&serde_json::json!({})), None);
    }

    #[test]
    fn non_string_error_values_still_render() {
        let body = serde_json::json!({ "status": 403 });
        assert_eq!(join_error_fields(&body).unwrap(), "403");
    }

    #[test]
    fn specialty_round_trips_through_wire_values() {
        for specialty in Specialty::ALL {
            let wire = serde_json::to_string(&specialty).unwrap();
            assert_eq!(wire, format!("\"{}\"", specialty.wire()));

            let back: Specialty = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, specialty);

            assert_eq!(Specialty::from_wire(specialty.wire()), Some(specialty));
        }
        assert!(serde_json::from_str::<Specialty>("\"DERMATOLOGIA\"").is_err());
        assert_eq!(Specialty::from_wire("DERMATOLOGIA"), None);
    }

    #[test]
    fn doctor_wire_names_are_camel_case() {
        let doctor: Doctor =
            serde_json::from_str(r#"{"id":7,"fullName":"Ana Ruiz","specialty":"CARDIOLOGIA"}"#)
                .unwrap();
        assert_eq!(doctor.id, 7);
        assert_eq!(doctor.full_name, "Ana Ruiz");
        assert_eq!(doctor.specialty, Specialty::Cardiology);

        let payload = DoctorPayload {
            full_name: "Ana Ruiz".to_string(),
            specialty: Specialty::Cardiology,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "fullName": "Ana Ruiz", "specialty": "CARDIOLOGIA" })
        );
    }

    #[test]
    fn appointment_request_serializes_for_the_backend() {
        let request = AppointmentRequest {
            doctor_id: 3,
            date_time: "2026-08-07T10:30".to_string(),
            reason: "Checkup".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "doctorId": 3,
                "dateTime": "2026-08-07T10:30",
                "reason": "Checkup",
            })
        );
    }
}
