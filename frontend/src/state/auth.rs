use crate::api::{ApiClient, ApiError, LoginRequest, UserResponse};
use crate::state::session::SessionStore;
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user_id: Option<String>,
    pub user: Option<UserResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    // Session presence implies a pending profile fetch: restore the stored
    // identifier and let the profile effect below settle `loading`.
    if let Some(stored_id) = session.restore() {
        set_auth_state.update(|state| {
            state.user_id = Some(stored_id);
            state.loading = true;
        });
    }

    // Fetch the profile whenever the identifier changes, the initial restore
    // included. A cached profile for the same id short-circuits the fetch.
    let user_id_memo = create_memo(move |_| auth_state.with(|state| state.user_id.clone()));
    create_effect(move |_| {
        let Some(user_id) = user_id_memo.get() else {
            return;
        };
        let cached = auth_state.with_untracked(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.id == user_id)
                .unwrap_or(false)
        });
        if cached {
            set_auth_state.update(|state| state.loading = false);
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            match api.fetch_user(&user_id).await {
                Ok(user) => set_auth_state.update(|state| {
                    state.user = Some(user);
                    state.loading = false;
                    state.error = None;
                }),
                // The session survives a failed profile fetch; forcing a
                // logout here would sign users out on any flaky request.
                Err(err) => set_auth_state.update(|state| {
                    state.error = Some(err.error);
                    state.loading = false;
                }),
            }
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    if use_context::<SessionStore>().is_none() {
        provide_context(SessionStore::new());
    }
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(SessionStore::new)
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    session: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| {
        state.loading = true;
        state.error = None;
    });

    match api.login(request).await {
        Ok(response) => {
            session.persist(&response.user.id);
            set_auth_state.update(|state| {
                state.user_id = Some(response.user.id.clone());
                state.user = Some(response.user);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            session.clear();
            set_auth_state.update(|state| {
                state.user_id = None;
                state.user = None;
                state.loading = false;
                state.error = Some(error.error.clone());
            });
            Err(error)
        }
    }
}

/// Synchronous: clears the session and cached profile, no network call.
pub fn logout(session: &SessionStore, set_auth_state: WriteSignal<AuthState>) {
    session.clear();
    set_auth_state.update(|state| *state = AuthState::default());
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Direct session mutation, used by cross-component sign-out triggers.
/// Setting `None` is equivalent to a logout without the redirect.
pub fn set_user_id(
    session: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
    user_id: Option<String>,
) {
    match &user_id {
        Some(id) => session.persist(id),
        None => session.clear(),
    }
    set_auth_state.update(|state| {
        state.user_id = user_id;
        if state.user_id.is_none() {
            state.user = None;
        }
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let session = use_session();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let session = session.clone();
        async move { login_request(payload, &api, &session, set_auth).await }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated());
            assert!(snapshot.user.is_none());
            assert!(snapshot.error.is_none());
        });
    }

    #[test]
    fn set_user_id_none_drops_the_cached_profile() {
        with_runtime(|| {
            let session = SessionStore::new();
            session.clear();
            let (state, set_state) = create_signal(AuthState {
                user_id: Some("u1".into()),
                user: Some(UserResponse {
                    id: "u1".into(),
                    username: "admin".into(),
                    ..UserResponse::default()
                }),
                loading: false,
                error: None,
            });

            set_user_id(&session, set_state, None);
            let snapshot = state.get();
            assert!(snapshot.user_id.is_none());
            assert!(snapshot.user.is_none());
            assert_eq!(session.restore(), None);
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn successful_login_persists_the_identifier() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200).json_body(json!({
                "user": {
                    "id": "u1",
                    "username": "admin",
                    "name": "Ada",
                    "surname": "Admin"
                }
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.base_url());
        let session = SessionStore::new();
        session.clear();

        login_request(
            LoginRequest {
                identifier: "admin".into(),
                password: "123456".into(),
            },
            &api,
            &session,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(session.restore(), Some("u1".to_string()));

        logout(&session, set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated());
        assert_eq!(session.restore(), None);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_clears_partial_state_and_storage() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401)
                .json_body(json!({"error": "Credenciales inválidas."}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.base_url());
        let session = SessionStore::new();
        session.persist("stale");

        let err = login_request(
            LoginRequest {
                identifier: "admin".into(),
                password: "nope".into(),
            },
            &api,
            &session,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "Credenciales inválidas.");
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated());
        assert_eq!(snapshot.error.as_deref(), Some("Credenciales inválidas."));
        assert_eq!(session.restore(), None);
        runtime.dispose();
    }
}
