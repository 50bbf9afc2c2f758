use crate::{
    api::{ApiError, LoginRequest},
    components::error::InlineErrorMessage,
    pages::login::{utils, view_model::use_login_view_model},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let error = vm.error;
    let login_action = vm.login_action;
    let pending = login_action.pending();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let identifier = form.identifier.get_untracked();
        let password = form.password.get_untracked();

        if let Err(msg) = utils::validate_credentials(&identifier, &password) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }

        error.set(None);
        login_action.dispatch(LoginRequest {
            identifier: identifier.trim().to_string(),
            password,
        });
    };

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-surface-elevated shadow rounded-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-fg">"CitasBot"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"Inicia sesión para administrar tus procesos"</p>
                </div>
                <InlineErrorMessage error={error.read_only().into()} />
                <form class="space-y-4" on:submit=handle_submit>
                    <div>
                        <label for="identifier" class="block text-sm font-medium text-fg">
                            "Usuario o correo"
                        </label>
                        <input
                            id="identifier"
                            name="identifier"
                            type="text"
                            autocomplete="username"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
                            prop:value=move || form.identifier.get()
                            on:input=move |ev| form.identifier.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">
                            "Contraseña"
                        </label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
                            prop:value=move || form.password.get()
                            on:input=move |ev| form.password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full inline-flex justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Ingresando..." } else { "Iniciar sesión" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
