//! HTTP middleware.
//!
//! Execution order (outermost → innermost):
//! 1. CORS: answers preflight, decorates responses
//! 2. Access log: method, path, status, latency

pub mod access_log;
pub mod cors;
