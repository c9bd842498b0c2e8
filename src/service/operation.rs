use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The closed set of operations the core exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Greet,
    Add,
    SystemInfo,
    Fibonacci,
    IsPrime,
    Factorize,
    CreateUser,
    ValidateEmail,
    CoreVersion,
}

/// Host-visible type of an argument or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ValueKind,
}

const fn number(name: &'static str) -> Param {
    Param {
        name,
        kind: ValueKind::Number,
    }
}

const fn text(name: &'static str) -> Param {
    Param {
        name,
        kind: ValueKind::Text,
    }
}

const ADD_PARAMS: &[Param] = &[number("a"), number("b")];
const N_PARAMS: &[Param] = &[number("n")];
const CREATE_USER_PARAMS: &[Param] = &[number("id"), text("name"), text("email")];
const EMAIL_PARAMS: &[Param] = &[text("email")];

/// Section an operation is listed under in generated host code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    Core,
    Math,
    Data,
    Version,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Core, Group::Math, Group::Data, Group::Version];

    pub fn label(&self) -> &'static str {
        match self {
            Group::Core => "Core API",
            Group::Math => "Math operations",
            Group::Data => "Data operations",
            Group::Version => "Version info",
        }
    }
}

/// What a failed call returns instead of raising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Numeric operations answer `0`
    Zero,
    /// Text operations answer `"Error: <message>"`
    ErrorText,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Greet,
        Operation::Add,
        Operation::SystemInfo,
        Operation::Fibonacci,
        Operation::IsPrime,
        Operation::Factorize,
        Operation::CreateUser,
        Operation::ValidateEmail,
        Operation::CoreVersion,
    ];

    /// Canonical name, also the CLI name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Greet => "greet",
            Operation::Add => "add",
            Operation::SystemInfo => "systemInfo",
            Operation::Fibonacci => "fibonacci",
            Operation::IsPrime => "isPrime",
            Operation::Factorize => "factorize",
            Operation::CreateUser => "createUser",
            Operation::ValidateEmail => "validateEmail",
            Operation::CoreVersion => "coreVersion",
        }
    }

    /// Name of the method on the JavaScript module object.
    pub fn js_name(&self) -> &'static str {
        match self {
            Operation::Greet => "helloWorld",
            Operation::Add => "addNumbers",
            Operation::SystemInfo => "getSystemInfo",
            Operation::Fibonacci => "fibonacci",
            Operation::IsPrime => "isPrime",
            Operation::Factorize => "factorize",
            Operation::CreateUser => "createUser",
            Operation::ValidateEmail => "validateEmail",
            Operation::CoreVersion => "getVersion",
        }
    }

    /// Exported C symbol, `mobilecore_<snake_name>`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Greet => "mobilecore_greet",
            Operation::Add => "mobilecore_add",
            Operation::SystemInfo => "mobilecore_system_info",
            Operation::Fibonacci => "mobilecore_fibonacci",
            Operation::IsPrime => "mobilecore_is_prime",
            Operation::Factorize => "mobilecore_factorize",
            Operation::CreateUser => "mobilecore_create_user",
            Operation::ValidateEmail => "mobilecore_validate_email",
            Operation::CoreVersion => "mobilecore_core_version",
        }
    }

    pub fn params(&self) -> &'static [Param] {
        match self {
            Operation::Greet | Operation::SystemInfo | Operation::CoreVersion => &[],
            Operation::Add => ADD_PARAMS,
            Operation::Fibonacci | Operation::IsPrime | Operation::Factorize => N_PARAMS,
            Operation::CreateUser => CREATE_USER_PARAMS,
            Operation::ValidateEmail => EMAIL_PARAMS,
        }
    }

    pub fn returns(&self) -> ValueKind {
        match self {
            Operation::Add
            | Operation::Fibonacci
            | Operation::IsPrime
            | Operation::ValidateEmail => ValueKind::Number,
            Operation::Greet
            | Operation::SystemInfo
            | Operation::Factorize
            | Operation::CreateUser
            | Operation::CoreVersion => ValueKind::Text,
        }
    }

    /// Fixed ahead of time by the result type.
    pub fn fallback(&self) -> Fallback {
        match self.returns() {
            ValueKind::Number => Fallback::Zero,
            ValueKind::Text => Fallback::ErrorText,
        }
    }

    pub fn group(&self) -> Group {
        match self {
            Operation::Greet | Operation::Add | Operation::SystemInfo => Group::Core,
            Operation::Fibonacci | Operation::IsPrime | Operation::Factorize => Group::Math,
            Operation::CreateUser | Operation::ValidateEmail => Group::Data,
            Operation::CoreVersion => Group::Version,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Operation::Greet => "Fixed greeting string",
            Operation::Add => "Sum of two integers",
            Operation::SystemInfo => "Build and platform description",
            Operation::Fibonacci => "nth Fibonacci number (0 <= n <= 78)",
            Operation::IsPrime => "1 if n is prime, 0 otherwise",
            Operation::Factorize => "Prime factors of n >= 2",
            Operation::CreateUser => "User record serialized as JSON",
            Operation::ValidateEmail => "1 if the text looks like an email address, 0 otherwise",
            Operation::CoreVersion => "Core library version",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    /// Accepts the canonical name or the JavaScript name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s || op.js_name() == s)
            .ok_or_else(|| CoreError::domain("call", format!("unknown operation '{}'", s)))
    }
}
