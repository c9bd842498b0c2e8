//! The computation behind every operation
//!
//! [`Kernel`] is the seam between the service boundary and the code that
//! actually computes. [`NativeKernel`] is the real implementation; tests swap
//! in kernels that fail on purpose.

pub mod info;
pub mod math;
pub mod records;

use regex::Regex;
use serde::Deserialize;

use crate::error::CoreResult;

pub use math::{Factorization, FIBONACCI_HARD_MAX};
pub use records::UserRecord;

/// Work bounds that keep every call short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Limits {
    #[serde(default = "default_fibonacci_max")]
    pub fibonacci_max: i32,
    #[serde(default = "default_factorize_max")]
    pub factorize_max: i32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            fibonacci_max: default_fibonacci_max(),
            factorize_max: default_factorize_max(),
        }
    }
}

fn default_fibonacci_max() -> i32 {
    FIBONACCI_HARD_MAX
}

fn default_factorize_max() -> i32 {
    i32::MAX
}

/// Integer-domain computations, already past argument truncation.
pub trait Kernel: Send + Sync {
    fn greet(&self) -> CoreResult<String>;
    fn add(&self, a: i32, b: i32) -> CoreResult<i64>;
    fn system_info(&self) -> CoreResult<String>;
    fn fibonacci(&self, n: i32) -> CoreResult<u64>;
    fn is_prime(&self, n: i32) -> CoreResult<bool>;
    fn factorize(&self, n: i32) -> CoreResult<Factorization>;
    fn create_user(&self, id: i32, name: &str, email: &str) -> CoreResult<String>;
    fn validate_email(&self, email: &str) -> CoreResult<bool>;
    fn core_version(&self) -> CoreResult<String>;
}

#[derive(Debug, Clone)]
pub struct NativeKernel {
    limits: Limits,
    email_rule: Regex,
}

impl NativeKernel {
    pub fn new(limits: Limits) -> CoreResult<Self> {
        Ok(Self {
            limits,
            email_rule: records::compile_email_rule()?,
        })
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }
}

impl Kernel for NativeKernel {
    fn greet(&self) -> CoreResult<String> {
        Ok(info::GREETING.to_string())
    }

    fn add(&self, a: i32, b: i32) -> CoreResult<i64> {
        Ok(a as i64 + b as i64)
    }

    fn system_info(&self) -> CoreResult<String> {
        Ok(info::system_info())
    }

    fn fibonacci(&self, n: i32) -> CoreResult<u64> {
        math::fibonacci(n, self.limits.fibonacci_max)
    }

    fn is_prime(&self, n: i32) -> CoreResult<bool> {
        Ok(math::is_prime(n))
    }

    fn factorize(&self, n: i32) -> CoreResult<Factorization> {
        math::factorize(n, self.limits.factorize_max)
    }

    fn create_user(&self, id: i32, name: &str, email: &str) -> CoreResult<String> {
        records::create_user(id, name, email)
    }

    fn validate_email(&self, email: &str) -> CoreResult<bool> {
        Ok(self.email_rule.is_match(email))
    }

    fn core_version(&self) -> CoreResult<String> {
        Ok(info::VERSION.to_string())
    }
}
