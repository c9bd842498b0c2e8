//! JNI entry points for the Android host
//!
//! Backs the `com.mobilecore.MobileCoreNative` Kotlin object emitted by
//! `mobilecore bindings`. Host numbers arrive as `jdouble` so truncation
//! happens here in the core, same as on the C path.

use jni::objects::{JClass, JString};
use jni::sys::{jdouble, jint, jstring};
use jni::JNIEnv;

use crate::error::{CoreError, CoreResult};
use crate::runtime;
use crate::service::{settle_number, settle_text, ComputationService, Operation};

fn read_jstring(env: &mut JNIEnv, op: &'static str, s: &JString) -> CoreResult<String> {
    if s.is_null() {
        return Err(CoreError::domain(op, "string argument is null"));
    }
    env.get_string(s)
        .map(String::from)
        .map_err(|e| CoreError::domain(op, format!("unreadable string argument: {}", e)))
}

fn new_jstring(env: &mut JNIEnv, s: String) -> jstring {
    match env.new_string(s) {
        Ok(js) => js.into_raw(),
        Err(e) => {
            // Only reachable with a pending JVM exception; the host sees that instead.
            log::error!("failed to allocate Java string: {}", e);
            std::ptr::null_mut()
        }
    }
}

fn text_call(
    env: &mut JNIEnv,
    op: Operation,
    f: impl FnOnce(&ComputationService) -> CoreResult<String>,
) -> jstring {
    let text = settle_text(op, runtime::service().and_then(f));
    new_jstring(env, text)
}

fn number_call(op: Operation, f: impl FnOnce(&ComputationService) -> CoreResult<f64>) -> jdouble {
    settle_number(op, runtime::service().and_then(f))
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeInit(
    mut env: JNIEnv,
    _class: JClass,
    config_path: JString,
) -> jint {
    let result = if config_path.is_null() {
        runtime::init(None)
    } else {
        read_jstring(&mut env, "init", &config_path)
            .and_then(|path| runtime::init(Some(std::path::Path::new(&path))))
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
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeGreet(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    text_call(&mut env, Operation::Greet, |svc| svc.try_greet())
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeAdd(
    _env: JNIEnv,
    _class: JClass,
    a: jdouble,
    b: jdouble,
) -> jdouble {
    number_call(Operation::Add, |svc| svc.try_add(a, b))
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeSystemInfo(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    text_call(&mut env, Operation::SystemInfo, |svc| svc.try_system_info())
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeFibonacci(
    _env: JNIEnv,
    _class: JClass,
    n: jdouble,
) -> jdouble {
    number_call(Operation::Fibonacci, |svc| svc.try_fibonacci(n))
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeIsPrime(
    _env: JNIEnv,
    _class: JClass,
    n: jdouble,
) -> jdouble {
    number_call(Operation::IsPrime, |svc| svc.try_is_prime(n))
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeFactorize(
    mut env: JNIEnv,
    _class: JClass,
    n: jdouble,
) -> jstring {
    text_call(&mut env, Operation::Factorize, |svc| svc.try_factorize(n))
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeCreateUser(
    mut env: JNIEnv,
    _class: JClass,
    id: jdouble,
    name: JString,
    email: JString,
) -> jstring {
    let args = read_jstring(&mut env, "createUser", &name)
        .and_then(|name| Ok((name, read_jstring(&mut env, "createUser", &email)?)));

    text_call(&mut env, Operation::CreateUser, |svc| {
        let (name, email) = args?;
        svc.try_create_user(id, &name, &email)
    })
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeValidateEmail(
    mut env: JNIEnv,
    _class: JClass,
    email: JString,
) -> jdouble {
    let email = read_jstring(&mut env, "validateEmail", &email);
    number_call(Operation::ValidateEmail, |svc| svc.try_validate_email(&email?))
}

#[no_mangle]
pub extern "system" fn Java_com_mobilecore_MobileCoreNative_nativeCoreVersion(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    text_call(&mut env, Operation::CoreVersion, |svc| svc.try_core_version())
}
