use crate::api::{ApiError, ProcessData, ProcessStatus};
use crate::utils::time;
use chrono::NaiveDate;
use leptos::*;

/// Consulates the bot knows how to book against.
pub const ALLOWED_LOCATIONS: [&str; 2] = ["Quito", "Guayaquil"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 3] =
        [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "Todos",
            StatusFilter::Active => "Activos",
            StatusFilter::Inactive => "Inactivos",
        }
    }

    pub fn matches(self, status: ProcessStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status.is_active(),
            StatusFilter::Inactive => !status.is_active(),
        }
    }
}

/// Case-insensitive substring match on the email, AND-combined with the
/// status filter. Runs over whatever the last fetch returned; no server
/// round-trip.
pub fn filter_processes(
    processes: &[ProcessData],
    email_filter: &str,
    status: StatusFilter,
) -> Vec<ProcessData> {
    let needle = email_filter.to_lowercase();
    processes
        .iter()
        .filter(|process| {
            process.email.to_lowercase().contains(&needle) && status.matches(process.status)
        })
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct ProcessFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub locations: RwSignal<Vec<String>>,
    pub months: RwSignal<Vec<String>>,
    pub blocked_days: RwSignal<Vec<String>>,
    pub editing: RwSignal<Option<ProcessData>>,
}

impl Default for ProcessFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            locations: create_rw_signal(Vec::new()),
            months: create_rw_signal(Vec::new()),
            blocked_days: create_rw_signal(Vec::new()),
            editing: create_rw_signal(None),
        }
    }
}

impl ProcessFormState {
    pub fn reset(&self) {
        self.email.set(String::new());
        self.password.set(String::new());
        self.locations.set(Vec::new());
        self.months.set(Vec::new());
        self.blocked_days.set(Vec::new());
        self.editing.set(None);
    }

    pub fn load(&self, process: &ProcessData) {
        self.email.set(process.email.clone());
        self.password.set(process.password.clone());
        self.locations.set(process.allowed_locations.clone());
        self.months.set(process.allowed_months.clone());
        self.blocked_days.set(process.blocked_days.clone());
        self.editing.set(Some(process.clone()));
    }

    pub fn is_editing(&self) -> bool {
        self.editing.with_untracked(|editing| editing.is_some())
    }

    /// Validates the selections and assembles the wire payload. The stop
    /// month is never user-picked: it is assigned from the window on create
    /// and kept verbatim from the loaded record on edit, so editing an old
    /// process cannot quietly push its cutoff forward.
    pub fn to_payload(
        &self,
        user_id: &str,
        month_window: &[String],
    ) -> Result<ProcessData, ApiError> {
        let email = self.email.get_untracked().trim().to_string();
        if email.is_empty() {
            return Err(ApiError::validation("Ingresa el correo de la cuenta"));
        }
        let password = self.password.get_untracked();
        if password.is_empty() {
            return Err(ApiError::validation("Ingresa la contraseña de la cuenta"));
        }
        let locations = self.locations.get_untracked();
        if locations.is_empty() {
            return Err(ApiError::validation("Selecciona al menos una ubicación"));
        }
        let months = self.months.get_untracked();
        if months.is_empty() {
            return Err(ApiError::validation("Selecciona al menos un mes"));
        }

        let previous = self.editing.get_untracked();
        Ok(ProcessData {
            user_id: previous
                .as_ref()
                .filter(|p| !p.user_id.is_empty())
                .map(|p| p.user_id.clone())
                .unwrap_or_else(|| user_id.to_string()),
            email,
            password,
            process_id: previous
                .as_ref()
                .map(|p| p.process_id.clone())
                .unwrap_or_default(),
            allowed_locations: locations,
            allowed_months: months,
            stop_month: previous
                .as_ref()
                .map(|p| p.stop_month.clone())
                .filter(|month| !month.is_empty())
                .unwrap_or_else(|| time::stop_month(month_window).unwrap_or_default()),
            blocked_days: self.blocked_days.get_untracked(),
            status: previous
                .as_ref()
                .map(|p| p.status)
                .unwrap_or(ProcessStatus::Inactive),
            pid: previous.as_ref().and_then(|p| p.pid),
        })
    }
}

/// Chip toggle: removes the option if present, appends it otherwise.
pub fn toggle_selection(values: RwSignal<Vec<String>>, option: &str) {
    values.update(|items| {
        if let Some(pos) = items.iter().position(|item| item == option) {
            items.remove(pos);
        } else {
            items.push(option.to_string());
        }
    });
}

/// Adds one blocked day, kept sorted and deduplicated. Dates outside
/// [today, last selectable day] are rejected.
pub fn add_blocked_day(
    days: RwSignal<Vec<String>>,
    raw: &str,
    today: NaiveDate,
    last_selectable: NaiveDate,
) -> Result<(), ApiError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation("Selecciona una fecha válida"))?;
    if date < today || date > last_selectable {
        return Err(ApiError::validation(
            "La fecha debe estar dentro de los meses permitidos",
        ));
    }
    let formatted = time::format_ymd(date);
    days.update(|days| {
        if !days.contains(&formatted) {
            days.push(formatted);
            days.sort();
        }
    });
    Ok(())
}

pub fn remove_blocked_day(days: RwSignal<Vec<String>>, value: &str) {
    days.update(|days| days.retain(|day| day != value));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSeverity {
    Error,
    Warning,
    Other,
}

/// Severity is the second " - "-separated token of a log line, e.g.
/// `2026-01-01 10:00:00 - ERROR - mensaje`.
pub fn log_severity(line: &str) -> LogSeverity {
    match line.split(" - ").nth(1).map(str::trim) {
        Some("ERROR") => LogSeverity::Error,
        Some("WARNING") => LogSeverity::Warning,
        _ => LogSeverity::Other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogCounts {
    pub errors: usize,
    pub warnings: usize,
}

pub fn count_logs(logs: &[String]) -> LogCounts {
    logs.iter().fold(LogCounts::default(), |mut acc, line| {
        match log_severity(line) {
            LogSeverity::Error => acc.errors += 1,
            LogSeverity::Warning => acc.warnings += 1,
            LogSeverity::Other => {}
        }
        acc
    })
}

pub fn log_line_class(line: &str) -> &'static str {
    match log_severity(line) {
        LogSeverity::Error => "text-status-error-text",
        LogSeverity::Warning => "text-status-warning-text",
        LogSeverity::Other => "text-fg",
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_process;
    use crate::test_support::ssr::with_runtime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn filter_matches_email_case_insensitively() {
        let processes = vec![
            sample_process("Ana@Test.com", ProcessStatus::Active),
            sample_process("otro@test.com", ProcessStatus::Inactive),
        ];
        let filtered = filter_processes(&processes, "ANA", StatusFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].email, "Ana@Test.com");
    }

    #[test]
    fn filter_combines_email_and_status() {
        let processes = vec![
            sample_process("a@test.com", ProcessStatus::Active),
            sample_process("b@test.com", ProcessStatus::Inactive),
        ];
        assert_eq!(
            filter_processes(&processes, "test", StatusFilter::Active).len(),
            1
        );
        assert_eq!(
            filter_processes(&processes, "", StatusFilter::All).len(),
            2
        );
        assert!(filter_processes(&processes, "a@", StatusFilter::Inactive).is_empty());
    }

    #[test]
    fn toggle_selection_round_trips() {
        with_runtime(|| {
            let values = create_rw_signal(Vec::new());
            toggle_selection(values, "Quito");
            assert_eq!(values.get_untracked(), vec!["Quito".to_string()]);
            toggle_selection(values, "Guayaquil");
            toggle_selection(values, "Quito");
            assert_eq!(values.get_untracked(), vec!["Guayaquil".to_string()]);
        });
    }

    #[test]
    fn blocked_days_stay_sorted_and_unique() {
        with_runtime(|| {
            let days = create_rw_signal(Vec::new());
            let today = date(2026, 3, 1);
            let last = date(2026, 7, 31);
            add_blocked_day(days, "2026-05-10", today, last).unwrap();
            add_blocked_day(days, "2026-03-02", today, last).unwrap();
            add_blocked_day(days, "2026-05-10", today, last).unwrap();
            assert_eq!(
                days.get_untracked(),
                vec!["2026-03-02".to_string(), "2026-05-10".to_string()]
            );
        });
    }

    #[test]
    fn blocked_day_outside_window_is_rejected() {
        with_runtime(|| {
            let days = create_rw_signal(Vec::new());
            let today = date(2026, 3, 1);
            let last = date(2026, 7, 31);
            assert!(add_blocked_day(days, "2026-02-28", today, last).is_err());
            assert!(add_blocked_day(days, "2026-08-01", today, last).is_err());
            assert!(add_blocked_day(days, "no-es-fecha", today, last).is_err());
            assert!(days.get_untracked().is_empty());
        });
    }

    #[test]
    fn remove_blocked_day_drops_only_that_day() {
        with_runtime(|| {
            let days = create_rw_signal(vec!["2026-03-02".to_string(), "2026-05-10".to_string()]);
            remove_blocked_day(days, "2026-03-02");
            assert_eq!(days.get_untracked(), vec!["2026-05-10".to_string()]);
        });
    }

    #[test]
    fn payload_requires_location_and_month_selections() {
        with_runtime(|| {
            let form = ProcessFormState::default();
            form.email.set("a@b.com".into());
            form.password.set("pw".into());
            let window: Vec<String> = vec![
                "marzo".into(),
                "abril".into(),
                "mayo".into(),
                "junio".into(),
                "julio".into(),
            ];

            let err = form.to_payload("u1", &window).unwrap_err();
            assert_eq!(err.error, "Selecciona al menos una ubicación");

            form.locations.set(vec!["Quito".into()]);
            let err = form.to_payload("u1", &window).unwrap_err();
            assert_eq!(err.error, "Selecciona al menos un mes");

            form.months.set(vec!["marzo".into()]);
            let payload = form.to_payload("u1", &window).unwrap();
            assert_eq!(payload.stop_month, "julio");
            assert_eq!(payload.user_id, "u1");
            assert!(!payload.status.is_active());
        });
    }

    #[test]
    fn payload_preserves_identity_when_editing() {
        with_runtime(|| {
            let form = ProcessFormState::default();
            let mut existing = sample_process("a@b.com", ProcessStatus::Inactive);
            existing.process_id = "p-77".into();
            existing.user_id = "owner".into();
            form.load(&existing);

            let window: Vec<String> = vec![
                "marzo".into(),
                "abril".into(),
                "mayo".into(),
                "junio".into(),
                "julio".into(),
            ];
            let payload = form.to_payload("someone-else", &window).unwrap();
            assert_eq!(payload.process_id, "p-77");
            assert_eq!(payload.user_id, "owner");
        });
    }

    #[test]
    fn payload_keeps_the_original_stop_month_when_editing() {
        with_runtime(|| {
            let form = ProcessFormState::default();
            let mut existing = sample_process("a@b.com", ProcessStatus::Inactive);
            existing.stop_month = "enero".into();
            form.load(&existing);

            let window: Vec<String> = vec![
                "marzo".into(),
                "abril".into(),
                "mayo".into(),
                "junio".into(),
                "julio".into(),
            ];
            let payload = form.to_payload("u1", &window).unwrap();
            assert_eq!(payload.stop_month, "enero");
        });
    }

    #[test]
    fn payload_falls_back_to_the_window_for_an_empty_stop_month() {
        with_runtime(|| {
            let form = ProcessFormState::default();
            let mut existing = sample_process("a@b.com", ProcessStatus::Inactive);
            existing.stop_month = String::new();
            form.load(&existing);

            let window: Vec<String> = vec![
                "marzo".into(),
                "abril".into(),
                "mayo".into(),
                "junio".into(),
                "julio".into(),
            ];
            let payload = form.to_payload("u1", &window).unwrap();
            assert_eq!(payload.stop_month, "julio");
        });
    }

    #[test]
    fn log_severity_reads_second_token() {
        assert_eq!(
            log_severity("2026-01-01 10:00:00 - ERROR - algo falló"),
            LogSeverity::Error
        );
        assert_eq!(
            log_severity("2026-01-01 10:00:00 - WARNING - ojo"),
            LogSeverity::Warning
        );
        assert_eq!(
            log_severity("2026-01-01 10:00:00 - INFO - ok"),
            LogSeverity::Other
        );
        assert_eq!(log_severity("línea suelta"), LogSeverity::Other);
    }

    #[test]
    fn log_counts_tally_errors_and_warnings() {
        let logs = vec![
            "2026-01-01 10:00:00 - ERROR - a".to_string(),
            "2026-01-01 10:00:01 - WARNING - b".to_string(),
            "2026-01-01 10:00:02 - INFO - c".to_string(),
            "2026-01-01 10:00:03 - ERROR - d".to_string(),
        ];
        let counts = count_logs(&logs);
        assert_eq!(counts.errors, 2);
        assert_eq!(counts.warnings, 1);
    }

    #[test]
    fn status_filter_labels_are_spanish() {
        assert_eq!(StatusFilter::All.label(), "Todos");
        assert_eq!(StatusFilter::Active.label(), "Activos");
        assert_eq!(StatusFilter::Inactive.label(), "Inactivos");
    }
}
