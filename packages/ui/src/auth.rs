//! Authentication context, route gate and sign-in/sign-out helpers.

use api::{ApiClient, Identity};
use dioxus::prelude::*;
use store::{jwt, SessionStore};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub authenticated: bool,
}

impl AuthState {
    fn from_session(session: &SessionStore) -> Self {
        let snapshot = session.snapshot();
        Self {
            authenticated: snapshot.is_authenticated(),
            user: snapshot.identity,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared session store.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

/// The shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that restores the persisted session and shares it,
/// together with the API client, with the whole tree.
#[component]
pub fn AuthProvider(client: ApiClient, children: Element) -> Element {
    let session = client.session().clone();

    use_context_provider(|| {
        session.restore();
        Signal::new(AuthState::from_session(&session))
    });
    use_context_provider(|| session.clone());
    use_context_provider(|| client.clone());

    rsx! {
        {children}
    }
}

/// Persist a successful login and publish it to the auth context.
pub fn sign_in(
    session: &SessionStore,
    auth_state: &mut Signal<AuthState>,
    identity: Identity,
    credential: String,
) {
    session.login(identity, credential);
    auth_state.set(AuthState::from_session(session));
}

/// Drop the session and publish the change to the auth context.
pub fn sign_out(session: &SessionStore, auth_state: &mut Signal<AuthState>) {
    session.logout();
    auth_state.set(AuthState::default());
}

/// Outcome of checking a navigation against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Decide whether protected content may render.
///
/// Starts from the persisted credential. A JWT whose `exp` has passed (as of
/// `now`, unix seconds) ends the session, and so does a persisted token that
/// never made it into the in-memory session (its user entry was missing or
/// unreadable), since requests would go out without it.
pub fn evaluate_gate(session: &SessionStore, now: i64) -> GateState {
    match session.persisted_credential() {
        None => GateState::Unauthenticated,
        Some(token) if jwt::is_expired(&token, now) => {
            tracing::info!("Credential expired");
            session.logout();
            GateState::Unauthenticated
        }
        Some(_) if session.current_credential().is_none() => {
            tracing::warn!("Persisted credential has no restorable session, clearing it");
            session.logout();
            GateState::Unauthenticated
        }
        Some(_) => GateState::Authenticated,
    }
}

/// Renders `children` only for an authenticated session; otherwise replaces
/// the current route with `login_path`. Re-checked whenever `path` changes.
#[component]
pub fn AuthGuard(
    path: String,
    #[props(default = "/login".to_string())] login_path: String,
    children: Element,
) -> Element {
    let session = use_session();
    let mut auth_state = use_auth();
    let mut gate = use_signal(|| GateState::Unknown);
    let nav = use_navigator();

    use_effect(use_reactive((&path,), move |(path,)| {
        let state = evaluate_gate(&session, jwt::now_unix_secs());
        if state == GateState::Unauthenticated {
            tracing::info!("No session for {}, redirecting to {}", path, login_path);
            if auth_state.peek().authenticated {
                auth_state.set(AuthState::default());
            }
            nav.replace(login_path.clone());
        }
        gate.set(state);
    }));

    match gate() {
        GateState::Authenticated => rsx! {
            {children}
        },
        GateState::Unknown | GateState::Unauthenticated => rsx! {
            div { class: "gate-loading", "Loading..." }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{KeyValueStore, MemoryStore, SessionStore};

    fn identity() -> Identity {
        Identity {
            id: "9".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    // header.{"exp":1000}.sig
    const EXPIRED_JWT: &str = "eyJhbGciOiJIUzI1NiJ9.eyJleHAiOjEwMDB9.sig";

    #[test]
    fn test_gate_without_credential_redirects() {
        let session = SessionStore::new(MemoryStore::new());
        session.restore();
        assert_eq!(evaluate_gate(&session, 0), GateState::Unauthenticated);
    }

    #[test]
    fn test_gate_with_persisted_credential_authenticates() {
        let backend = MemoryStore::new();
        SessionStore::new(backend.clone()).login(identity(), "opaque".to_string());

        let session = SessionStore::new(backend);
        assert!(session.restore());
        assert_eq!(evaluate_gate(&session, 0), GateState::Authenticated);
    }

    #[test]
    fn test_gate_logs_out_expired_jwt() {
        let session = SessionStore::new(MemoryStore::new());
        session.login(identity(), EXPIRED_JWT.to_string());

        assert_eq!(evaluate_gate(&session, 999), GateState::Authenticated);
        assert_eq!(evaluate_gate(&session, 1000), GateState::Unauthenticated);
        assert!(session.current_credential().is_none());
        assert!(session.persisted_credential().is_none());
    }

    #[test]
    fn test_gate_clears_token_without_restorable_user() {
        let backend = MemoryStore::new();
        backend.set("token", "persisted-token");
        backend.set("user", r#"{"id":1}"#);

        let session = SessionStore::new(backend.clone());
        assert!(!session.restore());
        assert_eq!(evaluate_gate(&session, 0), GateState::Unauthenticated);
        assert!(session.persisted_credential().is_none());
        assert!(backend.get("user").is_none());

        let client = ApiClient::new("https://api.test", session.clone());
        let request = client
            .list_offers_request(&api::ListQuery::new(5))
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_gate_clears_token_without_user_entry() {
        let backend = MemoryStore::new();
        backend.set("token", "orphan-token");

        let session = SessionStore::new(backend);
        session.restore();
        assert_eq!(evaluate_gate(&session, 0), GateState::Unauthenticated);
        assert!(session.persisted_credential().is_none());
    }

    #[test]
    fn test_gate_follows_logout() {
        let session = SessionStore::new(MemoryStore::new());
        session.login(identity(), "opaque".to_string());
        assert_eq!(evaluate_gate(&session, 0), GateState::Authenticated);

        session.logout();
        assert_eq!(evaluate_gate(&session, 0), GateState::Unauthenticated);
    }

    #[test]
    fn test_auth_state_from_session() {
        let session = SessionStore::new(MemoryStore::new());
        assert_eq!(AuthState::from_session(&session), AuthState::default());

        session.login(identity(), "t".to_string());
        let state = AuthState::from_session(&session);
        assert!(state.authenticated);
        assert_eq!(state.user, Some(identity()));
    }
}
