use base64::Engine as _;
use dioxus::prelude::*;
use shared_types::{Role, TokenClaims};
use std::fmt;

/// Storage key for the persisted bearer token.
const TOKEN_STORAGE_KEY: &str = "microcourses.access_token";

/// Why a token could not be turned into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Not three dot-separated segments, bad base64, or bad JSON.
    Malformed,
    /// The `exp` claim is in the past.
    Expired,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Malformed => write!(f, "token is malformed"),
            SessionError::Expired => write!(f, "token has expired"),
        }
    }
}

impl std::error::Error for SessionError {}

/// The client-held identity, derived from the persisted token.
///
/// Never mutated in place: a new login builds a fresh value, logout drops
/// it. The token payload is decoded without signature verification — the
/// client only branches UI on it; the server re-checks every request.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    /// The subject claim — the account's email address.
    pub subject: String,
    pub role: Role,
}

impl Session {
    /// Decode a raw token into a session, checking expiry against `now`
    /// (unix seconds). An unrecognized role degrades to `Role::Student`.
    pub fn from_token(token: &str, now: i64) -> Result<Self, SessionError> {
        let claims = decode_claims(token)?;
        if claims.is_expired(now) {
            return Err(SessionError::Expired);
        }
        Ok(Self {
            token: token.to_string(),
            subject: claims.sub,
            role: Role::from_str_or_default(&claims.role),
        })
    }

    /// Read the persisted token and derive a session from it.
    ///
    /// Returns `None` when no token is stored. A token that fails to decode
    /// (or has expired) is removed from storage before returning `None`, so
    /// repeated calls are idempotent and the app fails closed.
    pub fn load() -> Option<Self> {
        let token = storage::read(TOKEN_STORAGE_KEY)?;
        match Self::from_token(&token, chrono::Utc::now().timestamp()) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("discarding persisted token: {err}");
                storage::clear(TOKEN_STORAGE_KEY);
                None
            }
        }
    }

    /// Persist a freshly issued token and derive its session.
    ///
    /// On decode failure nothing is persisted.
    pub fn start(token: String) -> Result<Self, SessionError> {
        let session = Self::from_token(&token, chrono::Utc::now().timestamp())?;
        storage::write(TOKEN_STORAGE_KEY, &token);
        Ok(session)
    }

    /// Drop the persisted token. Idempotent.
    pub fn end() {
        storage::clear(TOKEN_STORAGE_KEY);
    }

    /// Name shown in dashboard headers: the local part of the subject
    /// email, or the role label when the subject is unusable.
    pub fn display_name(&self) -> String {
        match self.subject.split('@').next() {
            Some(local) if !local.is_empty() => local.to_string(),
            _ => self.role.label().to_string(),
        }
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_sig), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(SessionError::Malformed);
    };

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| SessionError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| SessionError::Malformed)
}

/// Global session state, provided via context at the app root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn set(&mut self, session: Session) {
        self.current.set(Some(session));
    }

    pub fn clear(&mut self) {
        self.current.set(None);
    }
}

/// Hook to access the session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Persisted token storage.
///
/// On the web this is browser `localStorage`; on native targets (desktop
/// feature, unit tests) a thread-local map stands in so the session code
/// paths behave identically.
mod storage {
    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn read(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn write(key: &str, value: &str) {
        if let Some(store) = local_storage() {
            let _ = store.set_item(key, value);
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn clear(key: &str) {
        if let Some(store) = local_storage() {
            let _ = store.remove_item(key);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    use std::cell::RefCell;
    #[cfg(not(target_arch = "wasm32"))]
    use std::collections::HashMap;

    #[cfg(not(target_arch = "wasm32"))]
    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    /// Build an unsigned token with the given claims JSON.
    fn token_with_payload(payload: &str) -> String {
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            engine.encode(payload),
            engine.encode("signature")
        )
    }

    fn creator_token() -> String {
        token_with_payload(r#"{"sub":"ada@example.com","role":"creator"}"#)
    }

    #[test]
    fn valid_token_yields_matching_role() {
        let session = Session::from_token(&creator_token(), 0).unwrap();
        assert_eq!(session.role, Role::Creator);
        assert_eq!(session.subject, "ada@example.com");
    }

    #[test]
    fn each_known_role_claim_maps_exactly() {
        for (claim, role) in [
            ("student", Role::Student),
            ("creator", Role::Creator),
            ("admin", Role::Admin),
        ] {
            let token =
                token_with_payload(&format!(r#"{{"sub":"u@example.com","role":"{claim}"}}"#));
            assert_eq!(Session::from_token(&token, 0).unwrap().role, role);
        }
    }

    #[test]
    fn unknown_role_degrades_to_student() {
        let token = token_with_payload(r#"{"sub":"u@example.com","role":"owner"}"#);
        assert_eq!(Session::from_token(&token, 0).unwrap().role, Role::Student);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for bad in [
            "",
            "not-a-token",
            "one.two",
            "one.two.three.four",
            "a.!!!not-base64!!!.c",
        ] {
            assert_eq!(
                Session::from_token(bad, 0).unwrap_err(),
                SessionError::Malformed
            );
        }

        // Valid base64 but not claims JSON.
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let junk = format!("{0}.{1}.{0}", engine.encode("x"), engine.encode("[1,2,3]"));
        assert_eq!(
            Session::from_token(&junk, 0).unwrap_err(),
            SessionError::Malformed
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let token =
            token_with_payload(r#"{"sub":"u@example.com","role":"student","exp":1000}"#);
        assert_eq!(
            Session::from_token(&token, 2000).unwrap_err(),
            SessionError::Expired
        );
        assert!(Session::from_token(&token, 999).is_ok());
    }

    #[test]
    fn load_is_none_when_nothing_persisted() {
        super::storage::clear(TOKEN_STORAGE_KEY);
        assert!(Session::load().is_none());
    }

    #[test]
    fn load_clears_malformed_token_and_stays_none() {
        super::storage::write(TOKEN_STORAGE_KEY, "garbage");
        assert!(Session::load().is_none());
        // Fails closed: the bad token is gone from storage.
        assert!(super::storage::read(TOKEN_STORAGE_KEY).is_none());
        // Idempotent under repeated calls.
        assert!(Session::load().is_none());
    }

    #[test]
    fn start_persists_and_load_roundtrips() {
        let session = Session::start(creator_token()).unwrap();
        assert_eq!(session.role, Role::Creator);

        let loaded = Session::load().expect("persisted session should load");
        assert_eq!(loaded, session);

        Session::end();
        assert!(Session::load().is_none());
        // end() twice is a no-op.
        Session::end();
    }

    #[test]
    fn start_rejects_bad_token_without_persisting() {
        super::storage::clear(TOKEN_STORAGE_KEY);
        assert!(Session::start("junk".to_string()).is_err());
        assert!(super::storage::read(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn display_name_is_email_local_part() {
        let session = Session::from_token(&creator_token(), 0).unwrap();
        assert_eq!(session.display_name(), "ada");

        let anon = token_with_payload(r#"{"sub":"","role":"creator"}"#);
        let session = Session::from_token(&anon, 0).unwrap();
        assert_eq!(session.display_name(), "Creator");
    }
}
