//! Shared contracts between the backend and any renderer of billing widgets.
//!
//! Everything here is pure: no I/O, no clock access. "Today" is always passed in.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
