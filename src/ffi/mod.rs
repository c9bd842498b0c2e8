//! C ABI exports
//!
//! One symbol per operation plus lifecycle and string release. Numbers cross
//! as `double` and are truncated inside the core. Strings returned here are
//! owned by the caller and must be released with [`mobilecore_free_string`].
//! No entry point ever unwinds into the caller or returns NULL.

#[cfg(feature = "jni-bridge")]
pub mod jni_bridge;

use std::ffi::{c_char, c_double, c_int, CStr, CString};
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::runtime;
use crate::service::{settle_number, settle_text, ComputationService, Operation};

/// Hand a string to C. Interior NULs would truncate it, so they are dropped.
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    let s = if s.contains('\0') { s.replace('\0', "") } else { s };
    CString::new(s).unwrap_or_default().into_raw()
}

/// Borrow a C string argument.
///
/// # Safety
/// - `ptr` must be NULL or point to a NUL-terminated string that outlives `'a`
unsafe fn read_str<'a>(op: &'static str, ptr: *const c_char) -> CoreResult<&'a str> {
    if ptr.is_null() {
        return Err(CoreError::domain(op, "string argument is NULL"));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| CoreError::domain(op, format!("string argument is not UTF-8: {}", e)))
}

fn number_call(
    op: Operation,
    f: impl FnOnce(&ComputationService) -> CoreResult<f64>,
) -> c_double {
    settle_number(op, runtime::service().and_then(f))
}

fn text_call(
    op: Operation,
    f: impl FnOnce(&ComputationService) -> CoreResult<String>,
) -> *mut c_char {
    into_c_string(settle_text(op, runtime::service().and_then(f)))
}

/// Initialize the core. Returns 0 on success and -1 on failure.
///
/// A NULL `config_path` uses the built-in defaults. Calling this is optional;
/// the first operation call initializes with defaults otherwise.
///
/// # Safety
/// - `config_path` must be NULL or a valid NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn mobilecore_init(config_path: *const c_char) -> c_int {
    let result = if config_path.is_null() {
        runtime::init(None)
    } else {
        read_str("init", config_path).and_then(|path| runtime::init(Some(Path::new(path))))
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("mobilecore init failed: {}", e);
            -1
        }
    }
}

#[no_mangle]
pub extern "C" fn mobilecore_shutdown() {
    runtime::shutdown();
}

#[no_mangle]
pub extern "C" fn mobilecore_greet() -> *mut c_char {
    text_call(Operation::Greet, |svc| svc.try_greet())
}

#[no_mangle]
pub extern "C" fn mobilecore_add(a: c_double, b: c_double) -> c_double {
    number_call(Operation::Add, |svc| svc.try_add(a, b))
}

#[no_mangle]
pub extern "C" fn mobilecore_system_info() -> *mut c_char {
    text_call(Operation::SystemInfo, |svc| svc.try_system_info())
}

#[no_mangle]
pub extern "C" fn mobilecore_fibonacci(n: c_double) -> c_double {
    number_call(Operation::Fibonacci, |svc| svc.try_fibonacci(n))
}

#[no_mangle]
pub extern "C" fn mobilecore_is_prime(n: c_double) -> c_double {
    number_call(Operation::IsPrime, |svc| svc.try_is_prime(n))
}

#[no_mangle]
pub extern "C" fn mobilecore_factorize(n: c_double) -> *mut c_char {
    text_call(Operation::Factorize, |svc| svc.try_factorize(n))
}

/// # Safety
/// - `name` and `email` must each be NULL or a valid NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn mobilecore_create_user(
    id: c_double,
    name: *const c_char,
    email: *const c_char,
) -> *mut c_char {
    text_call(Operation::CreateUser, |svc| {
        let name = read_str("createUser", name)?;
        let email = read_str("createUser", email)?;
        svc.try_create_user(id, name, email)
    })
}

/// # Safety
/// - `email` must be NULL or a valid NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn mobilecore_validate_email(email: *const c_char) -> c_double {
    number_call(Operation::ValidateEmail, |svc| {
        let email = read_str("validateEmail", email)?;
        svc.try_validate_email(email)
    })
}

#[no_mangle]
pub extern "C" fn mobilecore_core_version() -> *mut c_char {
    text_call(Operation::CoreVersion, |svc| svc.try_core_version())
}

/// Release a string returned by this library
///
/// # Safety
/// - `s` must be NULL or a pointer returned by this library, not yet freed
#[no_mangle]
pub unsafe extern "C" fn mobilecore_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Copy a returned string and release it.
    fn take(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
        unsafe { mobilecore_free_string(ptr) };
        s
    }

    #[test]
    fn test_text_exports() {
        assert_eq!(take(mobilecore_greet()), "Hello from Mobile Core!");
        assert_eq!(take(mobilecore_core_version()), env!("CARGO_PKG_VERSION"));
        assert!(take(mobilecore_system_info()).starts_with("mobilecore "));
        assert_eq!(take(mobilecore_factorize(12.0)), "Factors of 12: 2, 2, 3");
        assert_eq!(
            take(mobilecore_factorize(1.0)),
            "Error: factorize: requires n >= 2, got 1"
        );
    }

    #[test]
    fn test_number_exports() {
        assert_eq!(mobilecore_add(3.9, 2.9), 5.0);
        assert_eq!(mobilecore_fibonacci(10.0), 55.0);
        assert_eq!(mobilecore_fibonacci(-3.0), 0.0);
        assert_eq!(mobilecore_is_prime(13.0), 1.0);
        assert_eq!(mobilecore_is_prime(1.0), 0.0);
    }

    #[test]
    fn test_string_arguments() {
        let name = CString::new("Alice").unwrap();
        let email = CString::new("alice@example.com").unwrap();

        let json = take(unsafe { mobilecore_create_user(1.0, name.as_ptr(), email.as_ptr()) });
        assert_eq!(json, r#"{"id":1,"name":"Alice","email":"alice@example.com"}"#);

        assert_eq!(unsafe { mobilecore_validate_email(email.as_ptr()) }, 1.0);
        assert_eq!(unsafe { mobilecore_validate_email(name.as_ptr()) }, 0.0);
    }

    #[test]
    fn test_init_rejects_non_utf8_path() {
        let path = CString::new(vec![b'/', 0xff, 0xfe, b'x']).unwrap();
        assert_eq!(unsafe { mobilecore_init(path.as_ptr()) }, -1);
    }

    #[test]
    fn test_null_arguments_fall_back() {
        let email = CString::new("alice@example.com").unwrap();
        let out = take(unsafe { mobilecore_create_user(1.0, std::ptr::null(), email.as_ptr()) });
        assert_eq!(out, "Error: createUser: string argument is NULL");
        assert_eq!(unsafe { mobilecore_validate_email(std::ptr::null()) }, 0.0);
    }

    #[test]
    fn test_invalid_utf8_falls_back() {
        let bytes = CString::new(vec![0xffu8, 0xfe, b'@', b'x']).unwrap();
        assert_eq!(unsafe { mobilecore_validate_email(bytes.as_ptr()) }, 0.0);
    }

    #[test]
    fn test_into_c_string_drops_interior_nul() {
        assert_eq!(take(into_c_string("a\0b".to_string())), "ab");
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { mobilecore_free_string(std::ptr::null_mut()) };
    }
}
