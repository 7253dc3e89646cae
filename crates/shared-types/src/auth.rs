use serde::{Deserialize, Serialize};

/// Claims the client reads out of the bearer token payload.
///
/// Decoded without signature verification — the client only branches UI on
/// these values; the server re-checks authorization on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// The user's email address.
    pub sub: String,
    #[serde(default)]
    pub role: String,
    /// Expiry as a unix timestamp. Tokens without one are not expired
    /// locally; the server remains the authority.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn is_expired(&self, now: i64) -> bool {
        matches!(self.exp, Some(exp) if exp <= now)
    }
}

/// `POST /users/register` request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// `POST /login/` response: the bearer token plus an echo of the account.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<AccountInfo>,
}

/// Account echo returned by registration and embedded in the login response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AccountInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_deserialize_with_and_without_exp() {
        let with: TokenClaims =
            serde_json::from_str(r#"{"sub":"a@b.com","role":"creator","exp":4102444800}"#).unwrap();
        assert_eq!(with.sub, "a@b.com");
        assert_eq!(with.exp, Some(4_102_444_800));

        let without: TokenClaims = serde_json::from_str(r#"{"sub":"a@b.com"}"#).unwrap();
        assert_eq!(without.role, "");
        assert_eq!(without.exp, None);
    }

    #[test]
    fn expiry_is_checked_against_now() {
        let claims = TokenClaims {
            sub: "a@b.com".into(),
            role: "student".into(),
            exp: Some(1_000),
        };
        assert!(claims.is_expired(1_000));
        assert!(claims.is_expired(2_000));
        assert!(!claims.is_expired(999));
    }

    #[test]
    fn missing_exp_never_expires_locally() {
        let claims = TokenClaims {
            sub: "a@b.com".into(),
            role: "admin".into(),
            exp: None,
        };
        assert!(!claims.is_expired(i64::MAX));
    }

    #[test]
    fn login_response_tolerates_missing_user() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(resp.access_token, "abc");
        assert!(resp.user.is_none());
    }
}
