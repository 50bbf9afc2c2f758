use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::America::Guayaquil;

/// Number of months the search window spans, current month included.
pub const MONTH_WINDOW: usize = 5;

const MONTH_NAMES_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

pub fn today_in_app_tz() -> NaiveDate {
    Utc::now().with_timezone(&Guayaquil).date_naive()
}

/// Spanish lowercase month name, 1-based month number.
pub fn month_name_es(month: u32) -> &'static str {
    MONTH_NAMES_ES[(month as usize - 1) % 12]
}

/// The rolling window of selectable months starting at `today`'s month.
pub fn rolling_month_window(today: NaiveDate) -> Vec<String> {
    (0..MONTH_WINDOW)
        .map(|offset| {
            let month0 = (today.month0() as usize + offset) % 12;
            month_name_es(month0 as u32 + 1).to_string()
        })
        .collect()
}

/// The stop month is always the last entry of the rolling window.
pub fn stop_month(window: &[String]) -> Option<String> {
    window.get(MONTH_WINDOW - 1).cloned()
}

/// Last calendar day of the final window month; blocked days may not be
/// scheduled past it.
pub fn last_selectable_day(today: NaiveDate) -> NaiveDate {
    let months0 = today.year() * 12 + today.month0() as i32 + MONTH_WINDOW as i32;
    let (year, month0) = (months0.div_euclid(12), months0.rem_euclid(12));
    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1)
        .unwrap_or(today)
        .pred_opt()
        .unwrap_or(today)
}

pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
