//! Application layer: resolution and mutation orchestration.

pub mod services;
