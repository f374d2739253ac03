//! Server functions for authentication
//!
//! Credentials are exchanged for a JWT with the backend; its claims are
//! kept in the server-side session so the browser never holds the token.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::AuthUser;

/// Exchange credentials for a session. Returns `false` on rejected
/// credentials, errors on anything else.
#[server]
pub async fn login(username: String, password: String) -> Result<bool, ServerFnError> {
    use crate::api::{server_client, ClientError};

    #[derive(Serialize)]
    struct Credentials {
        username: String,
        password: String,
    }

    #[derive(Deserialize)]
    struct TokenResponse {
        access: String,
    }

    let client = server_client();
    let response: Result<TokenResponse, ClientError> = client
        .post_json("/auth/login", &Credentials { username, password })
        .await;

    match response {
        Ok(token) => {
            let user = decode_jwt_to_user(&token.access)?;
            set_session_user(&user).await?;
            set_session_token(&token.access).await?;
            Ok(true)
        }
        Err(ClientError::Status { code: 401 }) => Ok(false),
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

/// Get the current authenticated user from the session
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    get_session_user().await
}

/// Logout - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn decode_jwt_to_user(token: &str) -> Result<AuthUser, ServerFnError> {
    // The backend signed this token a moment ago; only the payload is
    // needed here, not signature verification.
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ServerFnError::new("Invalid JWT format"));
    }

    use base64::Engine;
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| ServerFnError::new(format!("Failed to decode JWT: {}", e)))?;

    #[derive(serde::Deserialize)]
    struct JwtClaims {
        username: String,
        user_type: crate::types::UserRole,
    }

    let claims: JwtClaims = serde_json::from_slice(&payload)
        .map_err(|e| ServerFnError::new(format!("Failed to parse JWT claims: {}", e)))?;

    Ok(AuthUser {
        username: claims.username,
        user_type: claims.user_type,
    })
}

#[cfg(feature = "server")]
async fn set_session_user(user: &AuthUser) -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .insert("user", user)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn set_session_token(token: &str) -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .insert("api_token", token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

/// Bearer token for backend calls made on behalf of this session.
#[cfg(feature = "server")]
pub async fn session_token() -> Option<String> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract().await.ok()?;
    session.get("api_token").await.ok().flatten()
}

#[cfg(feature = "server")]
async fn get_session_user() -> Result<Option<AuthUser>, ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .get("user")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get user from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}
