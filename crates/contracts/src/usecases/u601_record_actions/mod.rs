//! Quick actions on invoice and subscription record pages

pub mod availability;
pub mod request;
pub mod response;

pub use availability::*;
pub use request::*;
pub use response::*;
