//! Shared invocation contract for the fixture handlers.
//!
//! This crate owns the request/response shapes and the log-sink
//! abstraction the fixtures are written against. It intentionally
//! excludes Lambda runtime and subscriber concerns; those live in
//! `crates/fixture_lambda`.

pub mod contract;
pub mod gateway;
pub mod logging;
