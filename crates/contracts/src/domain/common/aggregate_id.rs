use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Идентификаторы выдаёт удалённый биллинг, поэтому это непрозрачные строки.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_str(&self) -> &str;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Общая проверка: ID не может быть пустым
pub fn validate_raw_id(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("ID не может быть пустым".into());
    }
    Ok(trimmed.to_string())
}
