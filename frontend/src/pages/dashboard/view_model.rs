use crate::api::{ApiClient, ApiError, ProcessData};
use crate::pages::dashboard::{
    repository::ProcessesRepository,
    utils::{ProcessFormState, StatusFilter},
};
use crate::state::auth::{use_auth, AuthState};
use crate::state::notifications::{use_notifier, Notifier};
use crate::utils::time;
use leptos::*;

#[cfg(target_arch = "wasm32")]
const POLL_INTERVAL_MS: u32 = 30_000;

#[derive(Clone)]
pub struct DashboardViewModel {
    pub repository: ProcessesRepository,
    pub auth: ReadSignal<AuthState>,
    pub processes_resource: Resource<(u32, Option<String>), Result<Vec<ProcessData>, ApiError>>,
    pub refresh_tick: RwSignal<u32>,
    pub email_filter: RwSignal<String>,
    pub status_filter: RwSignal<StatusFilter>,
    pub form: ProcessFormState,
    pub show_form: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub month_window: Vec<String>,
    pub submit_action: Action<ProcessData, Result<(), ApiError>>,
    pub stop_action: Action<String, Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub selected_process: RwSignal<Option<ProcessData>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = ProcessesRepository::new(api);
        let notifier = use_notifier();
        let (auth, _) = use_auth();

        let refresh_tick = create_rw_signal(0u32);
        let repo = repository.clone();
        let processes_resource = create_resource(
            move || (refresh_tick.get(), auth.with(|state| state.user_id.clone())),
            move |(_tick, user_id)| {
                let repo = repo.clone();
                async move { repo.list(user_id.as_deref()).await }
            },
        );

        let form = ProcessFormState::default();
        let show_form = create_rw_signal(false);
        let form_error = create_rw_signal(None::<ApiError>);

        let repo = repository.clone();
        let submit_notifier = notifier.clone();
        let submit_action = create_action(move |payload: &ProcessData| {
            run_submit(
                repo.clone(),
                submit_notifier.clone(),
                form,
                show_form,
                refresh_tick,
                payload.clone(),
                form.is_editing(),
            )
        });

        let repo = repository.clone();
        let stop_notifier = notifier.clone();
        let stop_action = create_action(move |email: &String| {
            run_stop(repo.clone(), stop_notifier.clone(), refresh_tick, email.clone())
        });

        let pending_delete = create_rw_signal(None::<String>);
        let repo = repository.clone();
        let delete_action = create_action(move |email: &String| {
            run_delete(
                repo.clone(),
                notifier.clone(),
                pending_delete,
                refresh_tick,
                email.clone(),
            )
        });

        // Background refresh keeps pid/status churn visible without user
        // interaction. Stops once the page's signals are disposed.
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                if refresh_tick
                    .try_update(|tick| *tick = tick.wrapping_add(1))
                    .is_none()
                {
                    break;
                }
            }
        });

        Self {
            repository,
            auth,
            processes_resource,
            refresh_tick,
            email_filter: create_rw_signal(String::new()),
            status_filter: create_rw_signal(StatusFilter::All),
            form,
            show_form,
            form_error,
            month_window: time::rolling_month_window(time::today_in_app_tz()),
            submit_action,
            stop_action,
            delete_action,
            pending_delete,
            selected_process: create_rw_signal(None),
        }
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.form_error.set(None);
        self.show_form.set(true);
    }

    pub fn open_edit(&self, process: &ProcessData) {
        self.form.load(process);
        self.form_error.set(None);
        self.show_form.set(true);
    }

    pub fn cancel_form(&self) {
        self.show_form.set(false);
        self.form_error.set(None);
        self.form.reset();
    }

    /// Client-side validation failures surface inline; everything past the
    /// dispatch is reported through the notifier.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let user_id = self
            .auth
            .with_untracked(|state| state.user_id.clone())
            .unwrap_or_default();
        match self.form.to_payload(&user_id, &self.month_window) {
            Ok(payload) => {
                self.form_error.set(None);
                self.submit_action.dispatch(payload);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    pub fn stop(&self, email: String) {
        if self.stop_action.pending().get_untracked() {
            return;
        }
        self.stop_action.dispatch(email);
    }

    pub fn request_delete(&self, email: String) {
        self.pending_delete.set(Some(email));
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(email) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(email);
        }
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn open_details(&self, process: &ProcessData) {
        self.selected_process.set(Some(process.clone()));
    }

    pub fn close_details(&self) {
        self.selected_process.set(None);
    }
}

// Every mutation bumps `refresh_tick` once the server confirms, which
// re-keys the list resource and forces a refetch.
fn bump_refresh(refresh_tick: RwSignal<u32>) {
    refresh_tick.update(|tick| *tick = tick.wrapping_add(1));
}

async fn run_submit(
    repo: ProcessesRepository,
    notifier: Notifier,
    form: ProcessFormState,
    show_form: RwSignal<bool>,
    refresh_tick: RwSignal<u32>,
    payload: ProcessData,
    editing: bool,
) -> Result<(), ApiError> {
    if editing {
        repo.update(&payload).await?;
        notifier.success("Proceso actualizado");
    } else {
        repo.create(&payload).await?;
        notifier.success("Proceso creado");
    }
    show_form.set(false);
    form.reset();
    bump_refresh(refresh_tick);
    Ok(())
}

async fn run_stop(
    repo: ProcessesRepository,
    notifier: Notifier,
    refresh_tick: RwSignal<u32>,
    email: String,
) -> Result<(), ApiError> {
    repo.stop(&email).await?;
    notifier.success("Proceso detenido");
    bump_refresh(refresh_tick);
    Ok(())
}

async fn run_delete(
    repo: ProcessesRepository,
    notifier: Notifier,
    pending_delete: RwSignal<Option<String>>,
    refresh_tick: RwSignal<u32>,
    email: String,
) -> Result<(), ApiError> {
    repo.delete(&email).await?;
    notifier.success("Proceso eliminado");
    pending_delete.set(None);
    bump_refresh(refresh_tick);
    Ok(())
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
