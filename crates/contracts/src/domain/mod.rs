pub mod a001_invoice;
pub mod a002_subscription;
pub mod common;
