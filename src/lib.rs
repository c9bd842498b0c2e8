//! mobilecore
//!
//! A small native computation service for mobile hosts. The host calls one
//! synchronous function per operation and always gets a number or a string
//! back; failures are logged and replaced by a fixed fallback value.
//!
//! The same service is reachable through the C ABI in [`ffi`], the optional
//! JNI bridge, and the `mobilecore` command line tool.

pub mod bindings;
pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod ffi;
pub mod kernel;
pub mod logging;
pub mod runtime;
pub mod service;

pub use error::{CoreError, CoreResult};
pub use service::{ComputationService, Operation, Value};
