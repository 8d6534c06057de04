//! Tracing/logging subsystem.

mod setup;

pub use setup::init_tracing;
