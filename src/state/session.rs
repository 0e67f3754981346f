//! Session State
//!
//! The bearer token and its decoded role, persisted to local storage so a
//! page reload keeps the user signed in. The reactive signal held by
//! [`AppState`](super::global::AppState) is the source of truth; storage is
//! only the cross-reload mirror.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "userRole";

/// Authorization level carried by the token's `role` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    fn from_claim(claim: &str) -> Self {
        if claim == "ADMIN" {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

/// The client-held authenticated identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    /// `None` when the token's payload does not decode
    pub role: Option<Role>,
}

impl Session {
    /// Build a session from a freshly issued token. A token whose payload
    /// does not decode still yields a session, just without a role.
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let role = decode_role(&token);
        Self { token, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Extract the `role` claim from a JWT without verifying the signature.
///
/// The backend remains the authority on authorization; the claim only
/// selects which views the client offers. Any malformation yields `None`.
pub fn decode_role(token: &str) -> Option<Role> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims
        .get("role")
        .and_then(|value| value.as_str())
        .map(Role::from_claim)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the session for the next page load. The role is written
/// alongside the token for quick external reads.
pub fn persist(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        match session.role {
            Some(role) => {
                let _ = storage.set_item(ROLE_KEY, role.as_str());
            }
            None => {
                let _ = storage.remove_item(ROLE_KEY);
            }
        }
    }
}

/// Restore the previous session, re-deriving the role from the token so a
/// stale cached role can never outlive the claim it came from.
pub fn restore() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    Some(Session::from_token(token))
}

/// Remove both persisted entries.
pub fn clear_storage() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn admin_claim_decodes() {
        let token = token_with_payload(r#"{"sub":"1","role":"ADMIN"}"#);
        assert_eq!(decode_role(&token), Some(Role::Admin));
    }

    #[test]
    fn non_admin_claims_map_to_user() {
        let token = token_with_payload(r#"{"sub":"2","role":"PACIENTE"}"#);
        assert_eq!(decode_role(&token), Some(Role::User));
    }

    #[test]
    fn malformed_tokens_have_no_role() {
        assert_eq!(decode_role(""), None);
        assert_eq!(decode_role("not-a-jwt"), None);
        assert_eq!(decode_role("a.$$$.c"), None);

        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        assert_eq!(decode_role(&not_json), None);

        let no_role_claim = token_with_payload(r#"{"sub":"1"}"#);
        assert_eq!(decode_role(&no_role_claim), None);
    }

    #[test]
    fn session_keeps_token_even_without_role() {
        let session = Session::from_token("garbage");
        assert_eq!(session.token, "garbage");
        assert_eq!(session.role, None);
        assert!(!session.is_admin());
    }

    #[test]
    fn session_from_admin_token_is_admin() {
        let token = token_with_payload(r#"{"role":"ADMIN"}"#);
        assert!(Session::from_token(token).is_admin());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn admin_token() -> String {
        format!(
            "header.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"sub":"1","role":"ADMIN"}"#)
        )
    }

    #[wasm_bindgen_test]
    fn persist_restore_clear_round_trip() {
        let session = Session::from_token(admin_token());
        persist(&session);

        let restored = restore().expect("session should restore");
        assert_eq!(restored.token, session.token);
        assert_eq!(restored.role, Some(Role::Admin));

        clear_storage();
        assert!(restore().is_none());
    }
}
