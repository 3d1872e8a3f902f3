/// Pick the singular form only for a count of exactly one
pub fn pluralize<'a>(count: i64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Display fallback for an optional related-record name
pub fn name_or(name: Option<&str>, fallback: &str) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "Invoice", "Invoices"), "Invoices");
        assert_eq!(pluralize(1, "Invoice", "Invoices"), "Invoice");
        assert_eq!(pluralize(2, "Invoice", "Invoices"), "Invoices");
    }

    #[test]
    fn test_name_or() {
        assert_eq!(name_or(Some("Acme"), "N/A"), "Acme");
        assert_eq!(name_or(Some("  "), "N/A"), "N/A");
        assert_eq!(name_or(None, "Not set"), "Not set");
    }
}
