//! Daily advertising-resource allocation: checkpoint targets, pacing
//! estimates and the operations status reports built from them.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
