use crate::components::confirm_dialog::ConfirmDialog;
use crate::pages::dashboard::{
    components::{ProcessDetailsDialog, ProcessForm, ProcessList},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let show_form = vm.show_form;
    let pending_delete = vm.pending_delete;

    let toggle_vm = vm.clone();
    let confirm_vm = vm.clone();
    let cancel_vm = vm.clone();
    let deleting = vm.delete_action.pending();

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|email| format!("¿Seguro que deseas eliminar el proceso de {email}?"))
            .unwrap_or_default()
    });

    view! {
        <DashboardFrame>
            <div class="flex items-center justify-between mb-4 px-4 sm:px-0">
                <h2 class="text-xl font-semibold text-fg">"Lista de Procesos"</h2>
                <button
                    type="button"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| {
                        if show_form.get_untracked() {
                            toggle_vm.cancel_form();
                        } else {
                            toggle_vm.open_create();
                        }
                    }
                >
                    {move || if show_form.get() { "Cancelar" } else { "Crear Proceso" }}
                </button>
            </div>
            <Show when=move || show_form.get()>
                <ProcessForm />
            </Show>
            <ProcessList />
            <ProcessDetailsDialog />
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title="Eliminar proceso"
                message=delete_message
                confirm_disabled=Signal::derive(move || deleting.get())
                destructive=true
                on_confirm=Callback::new(move |_| confirm_vm.confirm_delete())
                on_cancel=Callback::new(move |_| cancel_vm.cancel_delete())
            />
        </DashboardFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_renders_list_header_and_filters() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Lista de Procesos"));
        assert!(html.contains("Crear Proceso"));
        assert!(html.contains("Filtrar por email"));
    }

    #[test]
    fn delete_confirmation_names_the_target() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            let vm = use_dashboard_view_model();
            vm.request_delete("borrar@test.com".into());
            view! { <DashboardPage /> }
        });
        assert!(html.contains("¿Seguro que deseas eliminar el proceso de borrar@test.com?"));
    }
}
