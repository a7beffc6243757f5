//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{AuthError, Authenticator, EmsConfig, Session};

use crate::backend::{make_backend, Backend};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Copyable handle over the login guard and the reactive auth state.
#[derive(Clone, Copy)]
pub struct Auth {
    guard: CopyValue<Authenticator<Backend>>,
    state: Signal<AuthState>,
}

impl Auth {
    /// Current state. Reading it subscribes the calling component.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    pub fn login(mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.guard.read().login(email, password)?;
        self.state.set(AuthState {
            session: Some(session.clone()),
        });
        Ok(session)
    }

    pub fn logout(mut self) {
        self.guard.read().logout();
        self.state.set(AuthState::default());
    }
}

/// Get the authentication handle.
/// Its state updates when the user logs in or out.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that restores the persisted session and exposes [`Auth`].
/// Must sit below a provided [`EmsConfig`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<EmsConfig>();

    let guard = use_hook(|| {
        CopyValue::new(Authenticator::new(
            make_backend(),
            config.storage.auth_key.clone(),
            config.auth.clone(),
        ))
    });
    let state = use_signal(|| AuthState {
        session: guard.read().current_user(),
    });

    use_context_provider(|| Auth { guard, state });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_tracks_session() {
        assert!(!AuthState::default().is_authenticated());

        let state = AuthState {
            session: Some(Session {
                email: "admin@ems.com".to_string(),
                name: "Admin".to_string(),
            }),
        };
        assert!(state.is_authenticated());
    }
}
