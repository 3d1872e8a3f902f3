use serde::{Deserialize, Serialize};

/// Визуальное оформление бейджа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Error,
    Warning,
    Success,
    Inverse,
    Lightest,
}

impl BadgeVariant {
    /// Получить код варианта
    pub fn code(&self) -> &'static str {
        match self {
            BadgeVariant::Error => "error",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Success => "success",
            BadgeVariant::Inverse => "inverse",
            BadgeVariant::Lightest => "lightest",
        }
    }
}

impl std::fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
