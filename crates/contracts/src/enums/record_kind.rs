use serde::{Deserialize, Serialize};

/// Тип записи, на странице которой открыта панель действий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Invoice,
    Subscription,
}

impl RecordKind {
    /// API-имя объекта на стороне биллинга
    pub fn object_api_name(&self) -> &'static str {
        match self {
            RecordKind::Invoice => "Invoice__c",
            RecordKind::Subscription => "Subscription__c",
        }
    }

    /// Парсинг из API-имени объекта
    pub fn from_object_api_name(name: &str) -> Option<Self> {
        match name {
            "Invoice__c" => Some(RecordKind::Invoice),
            "Subscription__c" => Some(RecordKind::Subscription),
            _ => None,
        }
    }
}
