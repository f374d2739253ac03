//! Authentication context provider
//!
//! List pages read the current role from here once and pass the derived
//! permissions down as props; nothing deeper in the tree reaches into
//! ambient state.

use dioxus::prelude::*;

use super::server_fns::get_current_user;
use crate::types::AuthUser;

/// Session state shared with the whole app.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authenticated user (if any)
    pub user: Signal<Option<AuthUser>>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Whether the signed-in role may send facility notifications.
    pub fn can_notify(&self) -> bool {
        self.user
            .read()
            .as_ref()
            .map(|user| user.user_type.can_notify())
            .unwrap_or(false)
    }

    /// Refresh the session state from the server.
    pub async fn refresh(self) {
        let mut user = self.user;
        let mut loading = self.loading;
        match get_current_user().await {
            Ok(current) => user.set(current),
            Err(_) => user.set(None),
        }
        loading.set(false);
    }

    /// Clear the session state (logout).
    pub fn clear(self) {
        let mut user = self.user;
        user.set(None);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let user = use_signal(|| None::<AuthUser>);
    let loading = use_signal(|| true);

    let auth = AuthContext { user, loading };
    use_context_provider(|| auth);

    // Load initial session state
    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
