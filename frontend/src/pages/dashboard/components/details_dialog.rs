use crate::components::layout::LoadingSpinner;
use crate::pages::dashboard::{utils, view_model::use_dashboard_view_model};
use leptos::*;

#[component]
pub fn ProcessDetailsDialog() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let selected = vm.selected_process;

    let repo = vm.repository.clone();
    let logs_resource = create_resource(
        move || selected.with(|process| process.as_ref().map(|p| p.email.clone())),
        move |email| {
            let repo = repo.clone();
            async move {
                match email {
                    Some(email) => repo.logs(&email).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let close_vm = vm.clone();
    let close_backdrop_vm = vm;

    view! {
        <Show when=move || selected.with(|p| p.is_some())>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Cerrar"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click={
                        let vm = close_backdrop_vm.clone();
                        move |_| vm.close_details()
                    }
                ></button>
                <div
                    class="relative z-[61] w-full max-w-2xl rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4 max-h-[85vh] overflow-y-auto"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">"Detalles"</h2>
                        <button
                            type="button"
                            aria-label="Cerrar"
                            class="text-fg-muted hover:text-fg"
                            on:click={
                                let vm = close_vm.clone();
                                move |_| vm.close_details()
                            }
                        >
                            {"✕"}
                        </button>
                    </div>
                    {move || {
                        selected
                            .get()
                            .map(|process| {
                                view! {
                                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-2 text-sm">
                                        <p><span class="font-semibold">"Usuario: "</span>{process.email.clone()}</p>
                                        <p><span class="font-semibold">"Estado: "</span><span class="capitalize">{process.status.to_string()}</span></p>
                                        <p><span class="font-semibold">"Ubicaciones: "</span>{process.allowed_locations.join(", ")}</p>
                                        <p><span class="font-semibold">"Meses: "</span>{process.allowed_months.join(", ")}</p>
                                        <p><span class="font-semibold">"Días bloqueados: "</span>{process.blocked_days.join(", ")}</p>
                                        <p><span class="font-semibold">"Mes de corte: "</span>{process.stop_month.clone()}</p>
                                    </div>
                                }
                            })
                    }}
                    <div class="flex items-center justify-between">
                        <h3 class="text-base font-semibold text-fg">"Logs"</h3>
                        <div class="flex items-center gap-4">
                            {move || {
                                let counts = logs_resource
                                    .get()
                                    .and_then(|result| result.ok())
                                    .map(|logs| utils::count_logs(&logs))
                                    .unwrap_or_default();
                                view! {
                                    <span class="inline-flex items-center text-sm text-fg-muted">
                                        <span class="inline-block w-2.5 h-2.5 rounded-full mr-1 bg-status-error-border"></span>
                                        {counts.errors}
                                    </span>
                                    <span class="inline-flex items-center text-sm text-fg-muted">
                                        <span class="inline-block w-2.5 h-2.5 rounded-full mr-1 bg-status-warning-border"></span>
                                        {counts.warnings}
                                    </span>
                                }
                            }}
                            <button
                                type="button"
                                class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium bg-surface-muted text-fg hover:bg-surface-elevated border border-border"
                                on:click=move |_| logs_resource.refetch()
                            >
                                "Actualizar"
                            </button>
                        </div>
                    </div>
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || {
                            logs_resource
                                .get()
                                .map(|result| match result {
                                    Ok(logs) if logs.is_empty() => view! {
                                        <p class="text-sm text-fg-muted">"Sin registros para esta cuenta."</p>
                                    }
                                        .into_view(),
                                    Ok(logs) => view! {
                                        <div class="bg-surface rounded border border-border p-3 font-mono text-xs space-y-1 max-h-64 overflow-y-auto">
                                            {logs
                                                .into_iter()
                                                .map(|line| {
                                                    let class = utils::log_line_class(&line);
                                                    view! { <p class=class>{line}</p> }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_view(),
                                    Err(err) => view! {
                                        <p class="text-sm text-status-error-text">{err.error}</p>
                                    }
                                        .into_view(),
                                })
                        }}
                    </Suspense>
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated border border-border"
                            on:click={
                                let vm = close_vm.clone();
                                move |_| vm.close_details()
                            }
                        >
                            "Cerrar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ProcessStatus;
    use crate::test_support::helpers::{provide_auth, sample_process};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dialog_shows_selected_process_summary() {
        let html = render_to_string(move || {
            provide_auth(None);
            let vm = use_dashboard_view_model();
            let mut process = sample_process("detalle@test.com", ProcessStatus::Inactive);
            process.blocked_days = vec!["2026-09-10".into()];
            vm.open_details(&process);
            view! { <ProcessDetailsDialog /> }
        });
        assert!(html.contains("Detalles"));
        assert!(html.contains("detalle@test.com"));
        assert!(html.contains("2026-09-10"));
        assert!(html.contains("Logs"));
    }

    #[test]
    fn dialog_hidden_without_selection() {
        let html = render_to_string(move || {
            provide_auth(None);
            let _vm = use_dashboard_view_model();
            view! { <ProcessDetailsDialog /> }
        });
        assert!(!html.contains("Detalles"));
    }
}
