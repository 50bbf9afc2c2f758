#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Plan, ProcessData, ProcessStatus, UserResponse};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            username: "admin".into(),
            name: "Ada".into(),
            surname: "Admin".into(),
            email: "admin@citasbot.test".into(),
            checks_count: "42".into(),
            processes_finished: "3".into(),
            plan: Plan {
                plan_type: "processCount".into(),
                processes_available: "10".into(),
                checks_available: "500".into(),
                expiration: "2026-12-31".into(),
                renewed: String::new(),
                started: "2026-01-01".into(),
            },
            ..UserResponse::default()
        }
    }

    pub fn sample_process(email: &str, status: ProcessStatus) -> ProcessData {
        ProcessData {
            user_id: "u-admin".into(),
            email: email.into(),
            password: "secret".into(),
            process_id: format!("p-{email}"),
            allowed_locations: vec!["Quito".into()],
            allowed_months: vec!["enero".into()],
            stop_month: "mayo".into(),
            blocked_days: Vec::new(),
            status,
            pid: None,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let user_id = user.as_ref().map(|u| u.id.clone());
        let (auth, set_auth) = create_signal(AuthState {
            user_id,
            user,
            loading: false,
            error: None,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
