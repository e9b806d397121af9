//! Utility modules for DOM access and logging.
//!
//! Provides:
//! - [`dom`] - Element creation, lookup and inline styles
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
pub mod logger;
