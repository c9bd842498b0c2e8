//! The synchronous call surface
//!
//! Every public method on [`ComputationService`] returns a plain number or
//! string. Failures are carried as [`CoreError`] through the `try_*` methods,
//! logged at the boundary, and only then collapsed to the operation's
//! [`Fallback`]. A computed `0` and a failed call look the same to the host.

mod operation;

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::convert::{to_host, truncate_arg};
use crate::error::{CoreError, CoreResult};
use crate::kernel::{Kernel, Limits, NativeKernel};

pub use operation::{Fallback, Group, Operation, Param, ValueKind};

/// A host-visible argument or result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Result of one call before the boundary flattens it.
pub type Outcome = CoreResult<Value>;

impl Fallback {
    pub fn value(&self, err: &CoreError) -> Value {
        match self {
            Fallback::Zero => Value::Number(0.0),
            Fallback::ErrorText => Value::Text(error_text(err)),
        }
    }
}

pub fn error_text(err: &CoreError) -> String {
    format!("Error: {}", err)
}

thread_local! {
    static GUARDED: Cell<bool> = const { Cell::new(false) };
}

static PANIC_HOOK: Once = Once::new();

/// Panics caught by [`guard`] go to the log instead of stderr; any other
/// panic still reaches the previous hook.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if in_guard() {
            log::debug!("caught {}", info);
        } else {
            previous(info);
        }
    }));
}

fn in_guard() -> bool {
    GUARDED.with(Cell::get)
}

/// Run `f`, turning a panic into [`CoreError::Internal`].
pub fn guard<T>(f: impl FnOnce() -> CoreResult<T>) -> CoreResult<T> {
    PANIC_HOOK.call_once(install_panic_hook);

    let outer = GUARDED.with(|g| g.replace(true));
    let caught = panic::catch_unwind(AssertUnwindSafe(f));
    GUARDED.with(|g| g.set(outer));

    match caught {
        Ok(result) => result,
        Err(payload) => Err(CoreError::Internal(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

pub fn report_failure(op: Operation, err: &CoreError) {
    log::warn!("{} failed, returning fallback: {}", op, err);
}

/// Flatten an outcome into the value the host sees.
pub fn resolve(op: Operation, outcome: Outcome) -> Value {
    match outcome {
        Ok(value) => {
            log::debug!("{} -> {}", op, value);
            value
        }
        Err(err) => {
            report_failure(op, &err);
            op.fallback().value(&err)
        }
    }
}

pub fn settle_number(op: Operation, result: CoreResult<f64>) -> f64 {
    result.unwrap_or_else(|err| {
        report_failure(op, &err);
        0.0
    })
}

pub fn settle_text(op: Operation, result: CoreResult<String>) -> String {
    result.unwrap_or_else(|err| {
        report_failure(op, &err);
        error_text(&err)
    })
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

pub struct ComputationService<K: Kernel = NativeKernel> {
    kernel: K,
}

impl ComputationService<NativeKernel> {
    pub fn native(limits: Limits) -> CoreResult<Self> {
        Ok(Self::new(NativeKernel::new(limits)?))
    }
}

impl<K: Kernel> ComputationService<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn try_greet(&self) -> CoreResult<String> {
        guard(|| self.kernel.greet())
    }

    pub fn try_add(&self, a: f64, b: f64) -> CoreResult<f64> {
        guard(|| {
            let a = truncate_arg("add", a)?;
            let b = truncate_arg("add", b)?;
            Ok(to_host(self.kernel.add(a, b)?))
        })
    }

    pub fn try_system_info(&self) -> CoreResult<String> {
        guard(|| self.kernel.system_info())
    }

    pub fn try_fibonacci(&self, n: f64) -> CoreResult<f64> {
        guard(|| {
            let n = truncate_arg("fibonacci", n)?;
            // Bounded by F(78), well inside i64
            let value = self.kernel.fibonacci(n)? as i64;
            Ok(to_host(value))
        })
    }

    pub fn try_is_prime(&self, n: f64) -> CoreResult<f64> {
        guard(|| {
            let n = truncate_arg("isPrime", n)?;
            Ok(flag(self.kernel.is_prime(n)?))
        })
    }

    pub fn try_factorize(&self, n: f64) -> CoreResult<String> {
        guard(|| {
            let n = truncate_arg("factorize", n)?;
            Ok(self.kernel.factorize(n)?.to_string())
        })
    }

    pub fn try_create_user(&self, id: f64, name: &str, email: &str) -> CoreResult<String> {
        guard(|| {
            let id = truncate_arg("createUser", id)?;
            self.kernel.create_user(id, name, email)
        })
    }

    pub fn try_validate_email(&self, email: &str) -> CoreResult<f64> {
        guard(|| Ok(flag(self.kernel.validate_email(email)?)))
    }

    pub fn try_core_version(&self) -> CoreResult<String> {
        guard(|| self.kernel.core_version())
    }

    pub fn greet(&self) -> String {
        settle_text(Operation::Greet, self.try_greet())
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        settle_number(Operation::Add, self.try_add(a, b))
    }

    pub fn system_info(&self) -> String {
        settle_text(Operation::SystemInfo, self.try_system_info())
    }

    pub fn fibonacci(&self, n: f64) -> f64 {
        settle_number(Operation::Fibonacci, self.try_fibonacci(n))
    }

    pub fn is_prime(&self, n: f64) -> f64 {
        settle_number(Operation::IsPrime, self.try_is_prime(n))
    }

    pub fn factorize(&self, n: f64) -> String {
        settle_text(Operation::Factorize, self.try_factorize(n))
    }

    pub fn create_user(&self, id: f64, name: &str, email: &str) -> String {
        settle_text(Operation::CreateUser, self.try_create_user(id, name, email))
    }

    pub fn validate_email(&self, email: &str) -> f64 {
        settle_number(Operation::ValidateEmail, self.try_validate_email(email))
    }

    pub fn core_version(&self) -> String {
        settle_text(Operation::CoreVersion, self.try_core_version())
    }

    /// Run `op` on loosely typed arguments, keeping the failure detail.
    pub fn evaluate(&self, op: Operation, args: &[Value]) -> Outcome {
        check_args(op, args)?;

        match op {
            Operation::Greet => self.try_greet().map(Value::Text),
            Operation::Add => self
                .try_add(number_arg(args, 0), number_arg(args, 1))
                .map(Value::Number),
            Operation::SystemInfo => self.try_system_info().map(Value::Text),
            Operation::Fibonacci => self.try_fibonacci(number_arg(args, 0)).map(Value::Number),
            Operation::IsPrime => self.try_is_prime(number_arg(args, 0)).map(Value::Number),
            Operation::Factorize => self.try_factorize(number_arg(args, 0)).map(Value::Text),
            Operation::CreateUser => self
                .try_create_user(number_arg(args, 0), text_arg(args, 1), text_arg(args, 2))
                .map(Value::Text),
            Operation::ValidateEmail => self
                .try_validate_email(text_arg(args, 0))
                .map(Value::Number),
            Operation::CoreVersion => self.try_core_version().map(Value::Text),
        }
    }

    /// Name-based entry point; never fails.
    pub fn call(&self, op: Operation, args: &[Value]) -> Value {
        resolve(op, self.evaluate(op, args))
    }
}

fn check_args(op: Operation, args: &[Value]) -> CoreResult<()> {
    let params = op.params();
    if args.len() != params.len() {
        return Err(CoreError::domain(
            op.name(),
            format!("expects {} argument(s), got {}", params.len(), args.len()),
        ));
    }

    for (param, arg) in params.iter().zip(args) {
        if param.kind != arg.kind() {
            return Err(CoreError::domain(
                op.name(),
                format!("argument '{}' must be a {:?}, got {:?}", param.name, param.kind, arg.kind()),
            ));
        }
    }

    Ok(())
}

// Only called after check_args has matched kinds and arity.
fn number_arg(args: &[Value], i: usize) -> f64 {
    args.get(i).and_then(Value::as_number).unwrap_or(f64::NAN)
}

fn text_arg(args: &[Value], i: usize) -> &str {
    args.get(i).and_then(Value::as_text).unwrap_or_default()
}
