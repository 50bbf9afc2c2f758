use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Handle through which the API client (and pages) surface user-visible
/// notices. Injected instead of patching a global fetch so that several
/// mounted consumers never clobber each other.
#[derive(Clone)]
pub struct Notifier(Rc<dyn Fn(Notification)>);

impl Notifier {
    pub fn new(sink: impl Fn(Notification) + 'static) -> Self {
        Self(Rc::new(sink))
    }

    /// Drops notices on the floor; used when no provider is mounted.
    pub fn noop() -> Self {
        Self(Rc::new(|_| {}))
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        (self.0)(Notification {
            message: message.into(),
            severity,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }
}

pub type NotificationSignal = RwSignal<Option<Notification>>;

#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let latest: NotificationSignal = create_rw_signal(None);
    provide_context(latest);
    provide_context(Notifier::new(move |notification| {
        latest.set(Some(notification));
    }));
    view! { <>{children()}</> }
}

pub fn use_notifications() -> NotificationSignal {
    use_context::<NotificationSignal>().unwrap_or_else(|| create_rw_signal(None))
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(Notifier::noop)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use std::cell::RefCell;

    #[test]
    fn notifier_delivers_to_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let notifier = Notifier::new(move |n| sink.borrow_mut().push(n));

        notifier.success("Proceso creado");
        notifier.error("falló");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].severity, Severity::Success);
        assert_eq!(seen[1].message, "falló");
    }

    #[test]
    fn provider_feeds_latest_notification_signal() {
        with_runtime(|| {
            let latest: NotificationSignal = create_rw_signal(None);
            provide_context(latest);
            provide_context(Notifier::new(move |n| latest.set(Some(n))));

            use_notifier().notify("hola", Severity::Info);
            let current = use_notifications().get_untracked();
            assert_eq!(current.map(|n| n.message), Some("hola".to_string()));
        });
    }
}
