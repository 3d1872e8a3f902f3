pub mod a001_invoice;
pub mod a002_subscription;
pub mod classify;
pub mod d401_overdue_invoices;
pub mod d402_expiring_trials;
pub mod error;
pub mod record_actions;
