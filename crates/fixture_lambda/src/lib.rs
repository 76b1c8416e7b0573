//! Lambda fixture handlers for integration testing of a local
//! invocation framework.
//!
//! This crate owns runtime integration (one binary per fixture under
//! `src/bin/`) and keeps the handlers themselves pure: each takes the
//! opaque event, the invocation context, and an injected log sink, and
//! returns the fixed fixture response.

pub mod handlers;
pub mod sinks;
