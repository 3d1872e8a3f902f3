pub mod badge_variant;
pub mod record_kind;
