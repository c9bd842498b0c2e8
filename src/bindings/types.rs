use crate::service::{Operation, ValueKind};

impl ValueKind {
    /// Kotlin type on both the React method and the `external fun`
    pub fn to_kotlin_type(&self) -> &'static str {
        match self {
            ValueKind::Number => "Double",
            ValueKind::Text => "String",
        }
    }

    /// TypeScript type in the TurboModule spec
    pub fn to_ts_type(&self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Text => "string",
        }
    }

    /// C parameter type
    pub fn to_c_param_type(&self) -> &'static str {
        match self {
            ValueKind::Number => "double",
            ValueKind::Text => "const char *",
        }
    }

    /// C return type; returned strings are owned by the caller
    pub fn to_c_return_type(&self) -> &'static str {
        match self {
            ValueKind::Number => "double ",
            ValueKind::Text => "char *",
        }
    }

    /// Kotlin expression returned when the native call throws
    pub fn kotlin_fallback(&self) -> &'static str {
        match self {
            ValueKind::Number => "0.0",
            ValueKind::Text => "\"Error: ${e.message}\"",
        }
    }
}

/// `nativeFibonacci`, `nativeCreateUser`, ...
pub fn native_method_name(op: Operation) -> String {
    let name = op.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("native{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => "native".to_string(),
    }
}

/// Name of the JNI symbol backing `native_method_name(op)`.
pub fn jni_symbol(op: Operation) -> String {
    format!(
        "Java_{}_{}_{}",
        super::NATIVE_PACKAGE.replace('.', "_"),
        super::NATIVE_CLASS,
        native_method_name(op)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_method_names() {
        assert_eq!(native_method_name(Operation::Greet), "nativeGreet");
        assert_eq!(native_method_name(Operation::SystemInfo), "nativeSystemInfo");
        assert_eq!(native_method_name(Operation::CreateUser), "nativeCreateUser");
        assert_eq!(native_method_name(Operation::CoreVersion), "nativeCoreVersion");
    }

    #[test]
    fn test_jni_symbol() {
        assert_eq!(
            jni_symbol(Operation::IsPrime),
            "Java_com_mobilecore_MobileCoreNative_nativeIsPrime"
        );
    }

    #[test]
    fn test_type_mapping() {
        assert_eq!(ValueKind::Number.to_kotlin_type(), "Double");
        assert_eq!(ValueKind::Text.to_ts_type(), "string");
        assert_eq!(ValueKind::Text.to_c_param_type(), "const char *");
    }
}
