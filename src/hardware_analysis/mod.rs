/// Hardware analysis domain - pure scoring logic
///
/// Everything under this module is synchronous and side-effect free apart
/// from `tracing` events. Tables and thresholds are immutable once built.
pub mod domain;
pub mod policies;
pub mod services;
