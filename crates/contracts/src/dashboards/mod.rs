pub mod d401_overdue_invoices;
pub mod d402_expiring_trials;
