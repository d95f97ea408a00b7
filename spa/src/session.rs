use std::cell::Cell;
use std::rc::Rc;

use shared::{LoginResponse, Principal};
use yew::prelude::*;

use crate::api::auth_api;
use crate::error::{ApiError, AuthError};
use crate::storage::{KvStore, LocalStorage, TOKEN_KEY, USER_KEY};

/// Single slot serializing session-mutating operations. Claims are
/// generation-stamped: `logout`/`clear` bump the generation, so a login
/// continuation that was overtaken can detect it and discard its result
/// instead of racing the fields.
#[derive(Debug, Clone, Default)]
struct SlotGuard {
    busy: Rc<Cell<bool>>,
    generation: Rc<Cell<u64>>,
}

impl SlotGuard {
    fn try_claim(&self) -> Option<u64> {
        if self.busy.replace(true) {
            return None;
        }
        Some(self.generation.get())
    }

    fn release(&self) {
        self.busy.set(false);
    }

    fn supersede(&self) {
        self.generation.set(self.generation.get() + 1);
        self.busy.set(false);
    }

    fn is_current(&self, claim: u64) -> bool {
        self.generation.get() == claim
    }
}

/// Authentication state for this browser context. This module is the only
/// writer: components go through the operations below and never touch the
/// fields or the persisted keys themselves.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<Principal>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    guard: SlotGuard,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
            && self.token == other.token
            && self.is_authenticated == other.is_authenticated
    }
}

impl Session {
    /// Rebuild the session from durable storage. Runs once, before the
    /// router mounts. A stored token is trusted without a validation
    /// round-trip; it stays good until the backend rejects a request.
    pub fn restore(store: &impl KvStore) -> Self {
        if let Some(token) = store.read(TOKEN_KEY) {
            return Session {
                token: Some(token),
                is_authenticated: true,
                ..Session::default()
            };
        }
        match store.read(USER_KEY) {
            Some(raw) => match serde_json::from_str::<Principal>(&raw) {
                Ok(user) => Session {
                    user: Some(user),
                    is_authenticated: true,
                    ..Session::default()
                },
                Err(error) => {
                    log::warn!("Discarding corrupt persisted session: {error}");
                    store.delete(USER_KEY);
                    Session::default()
                }
            },
            None => Session::default(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|user| user.is_admin).unwrap_or(false)
    }

    pub fn display_label(&self) -> String {
        match &self.user {
            Some(user) if !user.display_name.is_empty() => user.display_name.clone(),
            Some(user) => user.name.clone(),
            None => String::new(),
        }
    }
}

pub enum SessionAction {
    LoginSucceeded {
        user: Principal,
        token: Option<String>,
    },
    SetUser(Principal),
    Cleared,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::LoginSucceeded { user, token } => {
                next.user = Some(user);
                next.token = token;
                next.is_authenticated = true;
            }
            SessionAction::SetUser(user) => {
                next.user = Some(user);
                next.is_authenticated = true;
            }
            SessionAction::Cleared => {
                next.user = None;
                next.token = None;
                next.is_authenticated = false;
            }
        }
        Rc::new(next)
    }
}

pub type SessionHandle = UseReducerHandle<Session>;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("session context not provided")
}

pub async fn login(
    session: &SessionHandle,
    name: String,
    password: String,
) -> Result<Principal, AuthError> {
    let Some(claim) = session.guard.try_claim() else {
        return Err(AuthError::Busy);
    };
    let result = auth_api::login(&name, &password).await;
    if !session.guard.is_current(claim) {
        // A logout or wipe won the race; this result no longer applies.
        log::warn!("Login result discarded, session changed while the request was in flight");
        return Err(AuthError::Rejected("Login was interrupted".to_string()));
    }
    let outcome = commit_login(&LocalStorage, result);
    session.guard.release();
    match outcome {
        Ok((user, token)) => {
            log::info!("User login successful, name={name}, user_id={}", user.id);
            session.dispatch(SessionAction::LoginSucceeded {
                user: user.clone(),
                token,
            });
            Ok(user)
        }
        Err(error) => {
            log::warn!("Login failed, name={name}, error={error}");
            Err(error)
        }
    }
}

/// Persist the outcome of a successful login. Token-less responses keep a
/// serialized copy of the user instead, so the session still survives a
/// reload.
fn commit_login(
    store: &impl KvStore,
    result: Result<LoginResponse, ApiError>,
) -> Result<(Principal, Option<String>), AuthError> {
    let response = result.map_err(|error| AuthError::Rejected(error.to_string()))?;
    if !response.success {
        let message = response.error.unwrap_or_else(|| "Login failed".to_string());
        return Err(AuthError::Rejected(message));
    }
    let user = response
        .user
        .ok_or_else(|| AuthError::Rejected("Login failed".to_string()))?;
    match &response.token {
        Some(token) => store.write(TOKEN_KEY, token),
        None => {
            if let Ok(serialized) = serde_json::to_string(&user) {
                store.write(USER_KEY, &serialized);
            }
        }
    }
    Ok((user, response.token))
}

/// Best-effort server notification, then unconditional local cleanup. A
/// network fault during sign-out must never leave the UI looking
/// authenticated.
pub async fn logout(session: &SessionHandle) {
    if let Some(user) = session.user.clone() {
        if let Err(error) = auth_api::logout(user.id).await {
            log::warn!("Logout notification failed, clearing local session anyway: {error}");
        }
    }
    session.guard.supersede();
    LocalStorage.delete(TOKEN_KEY);
    session.dispatch(SessionAction::Cleared);
}

/// Adopt an externally supplied principal without a login round-trip.
#[allow(dead_code)]
pub fn set_user(session: &SessionHandle, user: Principal) {
    session.dispatch(SessionAction::SetUser(user));
}

/// Full wipe: unlike `logout`, this also drops the persisted fallback
/// user record.
#[allow(dead_code)]
pub fn clear(session: &SessionHandle) {
    session.guard.supersede();
    LocalStorage.delete(TOKEN_KEY);
    LocalStorage.delete(USER_KEY);
    session.dispatch(SessionAction::Cleared);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::mem::MemStore;

    fn principal(id: i64) -> Principal {
        Principal {
            id,
            uuid: None,
            name: "a".to_string(),
            display_name: "A".to_string(),
            email: "a@example.com".to_string(),
            is_admin: false,
        }
    }

    fn success_response(token: Option<&str>) -> LoginResponse {
        LoginResponse {
            success: true,
            user: Some(principal(1)),
            token: token.map(str::to_string),
            message: Some("Login successful".to_string()),
            error: None,
        }
    }

    #[test]
    fn restore_with_token_authenticates_without_network() {
        let store = MemStore::default();
        store.write(TOKEN_KEY, "T1");
        let session = Session::restore(&store);
        assert!(session.is_authenticated);
        assert_eq!(session.token.as_deref(), Some("T1"));
        assert!(session.user.is_none());
    }

    #[test]
    fn restore_with_fallback_user_record() {
        let store = MemStore::default();
        store.write(USER_KEY, &serde_json::to_string(&principal(4)).unwrap());
        let session = Session::restore(&store);
        assert!(session.is_authenticated);
        assert_eq!(session.user.map(|user| user.id), Some(4));
    }

    #[test]
    fn restore_discards_corrupt_user_record() {
        let store = MemStore::default();
        store.write(USER_KEY, "{not json");
        let session = Session::restore(&store);
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert_eq!(store.read(USER_KEY), None);
    }

    #[test]
    fn restore_with_empty_storage_stays_unauthenticated() {
        let session = Session::restore(&MemStore::default());
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    #[test]
    fn successful_login_persists_token() {
        let store = MemStore::default();
        let (user, token) = commit_login(&store, Ok(success_response(Some("T1")))).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(token.as_deref(), Some("T1"));
        assert_eq!(store.read(TOKEN_KEY).as_deref(), Some("T1"));
        assert_eq!(store.read(USER_KEY), None);
    }

    #[test]
    fn tokenless_login_persists_user_record_instead() {
        let store = MemStore::default();
        commit_login(&store, Ok(success_response(None))).unwrap();
        assert_eq!(store.read(TOKEN_KEY), None);
        let stored: Principal = serde_json::from_str(&store.read(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored.id, 1);
    }

    #[test]
    fn rejected_login_touches_nothing_and_surfaces_message() {
        let store = MemStore::default();
        let response = LoginResponse {
            success: false,
            error: Some("Invalid username or password".to_string()),
            ..LoginResponse::default()
        };
        let error = commit_login(&store, Ok(response)).unwrap_err();
        assert_eq!(
            error,
            AuthError::Rejected("Invalid username or password".to_string())
        );
        assert_eq!(store.read(TOKEN_KEY), None);
        assert_eq!(store.read(USER_KEY), None);
    }

    #[test]
    fn rejected_login_without_message_gets_generic_text() {
        let response = LoginResponse {
            success: false,
            ..LoginResponse::default()
        };
        let error = commit_login(&MemStore::default(), Ok(response)).unwrap_err();
        assert_eq!(error, AuthError::Rejected("Login failed".to_string()));
    }

    #[test]
    fn transport_failure_is_surfaced_without_state_change() {
        let store = MemStore::default();
        let result = commit_login(
            &store,
            Err(ApiError::Transport("connection refused".to_string())),
        );
        assert!(matches!(result, Err(AuthError::Rejected(_))));
        assert_eq!(store.read(TOKEN_KEY), None);
    }

    #[test]
    fn reducer_login_success_sets_identity() {
        let session = Rc::new(Session::default());
        let next = session.reduce(SessionAction::LoginSucceeded {
            user: principal(1),
            token: Some("T1".to_string()),
        });
        assert!(next.is_authenticated);
        assert_eq!(next.token.as_deref(), Some("T1"));
        assert_eq!(next.user.as_ref().map(|user| user.id), Some(1));
    }

    #[test]
    fn reducer_cleared_drops_identity_and_flag() {
        let authenticated = Rc::new(Session::default()).reduce(SessionAction::LoginSucceeded {
            user: principal(1),
            token: Some("T1".to_string()),
        });
        let next = authenticated.reduce(SessionAction::Cleared);
        assert!(!next.is_authenticated);
        assert!(next.user.is_none());
        assert!(next.token.is_none());
    }

    #[test]
    fn authenticated_flag_always_backed_by_identity() {
        let transitions = [
            Rc::new(Session::default()).reduce(SessionAction::SetUser(principal(2))),
            Rc::new(Session::default()).reduce(SessionAction::LoginSucceeded {
                user: principal(3),
                token: None,
            }),
        ];
        for session in transitions {
            assert!(!session.is_authenticated || session.user.is_some() || session.token.is_some());
        }
    }

    #[test]
    fn slot_guard_rejects_overlapping_claims() {
        let guard = SlotGuard::default();
        let claim = guard.try_claim().unwrap();
        assert!(guard.try_claim().is_none());
        guard.release();
        assert!(guard.is_current(claim));
        assert!(guard.try_claim().is_some());
    }

    #[test]
    fn superseded_claim_is_detected() {
        let guard = SlotGuard::default();
        let claim = guard.try_claim().unwrap();
        guard.supersede();
        assert!(!guard.is_current(claim));
        // the slot is free again for the next operation
        assert!(guard.try_claim().is_some());
    }
}
