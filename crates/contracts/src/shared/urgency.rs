//! Date-driven urgency classification
//!
//! Turns a record's calendar date into a day count, a severity tier and a
//! display label. Only calendar days matter: both inputs are truncated to
//! midnight before any arithmetic.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::enums::badge_variant::BadgeVariant;
use crate::shared::labels::pluralize;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Overdue: count above this is critical
const OVERDUE_CRITICAL_AFTER: i64 = 30;
/// Overdue: count above this is a warning
const OVERDUE_WARNING_AFTER: i64 = 7;
/// ExpiringSoon: count up to this is a warning
const EXPIRING_WARNING_UNTIL: i64 = 3;

/// Режим классификации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyMode {
    /// Просроченные обязательства (срок оплаты счёта)
    Overdue,
    /// Истекающие состояния (окончание пробного периода)
    ExpiringSoon,
}

/// Уровень срочности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityTier {
    Critical,
    Warning,
    Normal,
}

impl SeverityTier {
    /// Badge used to render a record of this tier in the given mode
    pub fn badge_variant(&self, mode: UrgencyMode) -> BadgeVariant {
        match (self, mode) {
            (SeverityTier::Critical, _) => BadgeVariant::Error,
            (SeverityTier::Warning, _) => BadgeVariant::Warning,
            (SeverityTier::Normal, UrgencyMode::Overdue) => BadgeVariant::Lightest,
            (SeverityTier::Normal, UrgencyMode::ExpiringSoon) => BadgeVariant::Success,
        }
    }
}

/// Результат классификации одной даты
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub day_offset: i64,
    pub severity_tier: SeverityTier,
    pub label: String,
}

impl Classification {
    fn no_date() -> Self {
        Self {
            day_offset: 0,
            severity_tier: SeverityTier::Normal,
            label: String::new(),
        }
    }
}

/// Classify `target_date` relative to `today`.
///
/// Total over its inputs: a missing date yields a zero offset with `Normal`
/// severity and an empty label.
pub fn classify(
    today: NaiveDateTime,
    target_date: Option<NaiveDateTime>,
    mode: UrgencyMode,
) -> Classification {
    let Some(target_date) = target_date else {
        return Classification::no_date();
    };

    let day_offset = day_offset(today, target_date, mode);

    Classification {
        day_offset,
        severity_tier: severity_tier(day_offset, mode),
        label: label(day_offset, mode),
    }
}

/// Same as [`classify`] for values that are already calendar days
pub fn classify_dates(
    today: NaiveDate,
    target_date: Option<NaiveDate>,
    mode: UrgencyMode,
) -> Classification {
    classify(
        start_of_day(today),
        target_date.map(start_of_day),
        mode,
    )
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

fn truncate_to_midnight(value: NaiveDateTime) -> NaiveDateTime {
    start_of_day(value.date())
}

fn day_offset(today: NaiveDateTime, target_date: NaiveDateTime, mode: UrgencyMode) -> i64 {
    let today = truncate_to_midnight(today);
    let target_date = truncate_to_midnight(target_date);

    match mode {
        UrgencyMode::Overdue => {
            let elapsed_ms = (today - target_date).num_milliseconds();
            let days = elapsed_ms.div_euclid(MS_PER_DAY);
            if days > 0 {
                days
            } else {
                0
            }
        }
        UrgencyMode::ExpiringSoon => {
            let remaining_ms = (target_date - today).num_milliseconds();
            // ceil(remaining / day)
            let days = -(-remaining_ms).div_euclid(MS_PER_DAY);
            if days >= 0 {
                days
            } else {
                0
            }
        }
    }
}

fn severity_tier(day_offset: i64, mode: UrgencyMode) -> SeverityTier {
    match mode {
        UrgencyMode::Overdue => {
            if day_offset > OVERDUE_CRITICAL_AFTER {
                SeverityTier::Critical
            } else if day_offset > OVERDUE_WARNING_AFTER {
                SeverityTier::Warning
            } else {
                SeverityTier::Normal
            }
        }
        UrgencyMode::ExpiringSoon => {
            if day_offset == 0 {
                SeverityTier::Critical
            } else if day_offset <= EXPIRING_WARNING_UNTIL {
                SeverityTier::Warning
            } else {
                SeverityTier::Normal
            }
        }
    }
}

fn label(day_offset: i64, mode: UrgencyMode) -> String {
    match mode {
        UrgencyMode::Overdue if day_offset == 0 => String::new(),
        UrgencyMode::Overdue => overdue_label(day_offset),
        UrgencyMode::ExpiringSoon if day_offset == 0 => "Expires today!".to_string(),
        UrgencyMode::ExpiringSoon => {
            format!("{} {} left", day_offset, pluralize(day_offset, "day", "days"))
        }
    }
}

/// "N day(s) overdue", rendered for any count including zero
pub fn overdue_label(days: i64) -> String {
    format!("{} {} overdue", days, pluralize(days, "day", "days"))
}

// ============================================================================
// Ordering
// ============================================================================

/// Запись, которую можно упорядочить по срочности
pub trait UrgencyRanked {
    fn record_id(&self) -> &str;
    fn day_offset(&self) -> i64;
}

/// Most urgent first, ties broken by record id.
///
/// Overdue puts the largest offset first, ExpiringSoon the smallest.
/// The sort is stable, so fully equal keys keep their input order.
pub fn sort_by_urgency<T: UrgencyRanked>(items: &mut [T], mode: UrgencyMode) {
    items.sort_by(|a, b| {
        let by_days = match mode {
            UrgencyMode::Overdue => b.day_offset().cmp(&a.day_offset()),
            UrgencyMode::ExpiringSoon => a.day_offset().cmp(&b.day_offset()),
        };
        by_days.then_with(|| a.record_id().cmp(b.record_id()))
    });
}

// ============================================================================
// API DTO
// ============================================================================

/// Запрос на классификацию произвольной даты
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// "YYYY-MM-DD" or ISO date-time; the server's current day when absent
    pub today: Option<String>,
    /// "YYYY-MM-DD" or ISO date-time
    pub target_date: Option<String>,
    pub mode: UrgencyMode,
}

/// Ответ классификации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub classification: Classification,
    pub badge_variant: BadgeVariant,
}

impl ClassifyResponse {
    pub fn new(classification: Classification, mode: UrgencyMode) -> Self {
        let badge_variant = classification.severity_tier.badge_variant(mode);
        Self {
            classification,
            badge_variant,
        }
    }
}
