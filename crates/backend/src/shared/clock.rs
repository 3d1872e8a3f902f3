use chrono::NaiveDate;

/// Current local calendar day.
///
/// Handlers read it once per request and pass it down; nothing below the
/// handler layer touches the wall clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
