pub mod date_utils;
pub mod labels;
pub mod remote_error;
pub mod urgency;
