use crate::state::notifications::{use_notifications, Severity};
use leptos::*;

#[cfg(target_arch = "wasm32")]
const TOAST_DISMISS_MS: u32 = 3_000;

fn toast_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
        Severity::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
        Severity::Warning => "bg-status-warning-bg border-status-warning-border text-status-warning-text",
        Severity::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

/// Floating notice fed by the notification context. Dismisses itself after a
/// few seconds; a newer notice restarts the countdown.
#[component]
pub fn NotificationToast() -> impl IntoView {
    let notifications = use_notifications();

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let generation = Rc::new(Cell::new(0u64));
        create_effect(move |_| {
            if notifications.get().is_none() {
                return;
            }
            let generation = generation.clone();
            let current = generation.get() + 1;
            generation.set(current);
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                if generation.get() == current {
                    notifications.set(None);
                }
            });
        });
    }

    view! {
        <Show when=move || notifications.get().is_some()>
            <div class="fixed bottom-4 right-4 z-[80] w-full max-w-sm">
                <div
                    class=move || {
                        let severity = notifications
                            .get()
                            .map(|n| n.severity)
                            .unwrap_or(Severity::Info);
                        format!(
                            "flex items-start justify-between gap-3 border px-4 py-3 rounded shadow-lg {}",
                            toast_class(severity)
                        )
                    }
                    role="status"
                >
                    <span class="text-sm font-medium">
                        {move || notifications.get().map(|n| n.message).unwrap_or_default()}
                    </span>
                    <button
                        type="button"
                        aria-label="Cerrar"
                        class="opacity-70 hover:opacity-100"
                        on:click=move |_| notifications.set(None)
                    >
                        {"✕"}
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notifications::{Notification, NotificationSignal};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toast_renders_latest_notification() {
        let html = render_to_string(move || {
            let latest: NotificationSignal = create_rw_signal(Some(Notification {
                message: "Proceso creado".into(),
                severity: Severity::Success,
            }));
            provide_context(latest);
            view! { <NotificationToast /> }
        });
        assert!(html.contains("Proceso creado"));
        assert!(html.contains("role=\"status\""));
        assert!(html.contains("status-success"));
    }

    #[test]
    fn toast_hidden_when_no_notification() {
        let html = render_to_string(move || {
            let latest: NotificationSignal = create_rw_signal(None);
            provide_context(latest);
            view! { <NotificationToast /> }
        });
        assert!(!html.contains("role=\"status\""));
    }
}
