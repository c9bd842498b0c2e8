use super::banner;
use crate::service::{Group, Operation};

fn declaration(op: Operation) -> String {
    let params = if op.params().is_empty() {
        "void".to_string()
    } else {
        op.params()
            .iter()
            .map(|p| {
                let ty = p.kind.to_c_param_type();
                if ty.ends_with('*') {
                    format!("{}{}", ty, p.name)
                } else {
                    format!("{} {}", ty, p.name)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!("{}{}({});\n", op.returns().to_c_return_type(), op.symbol(), params)
}

/// Header for the C ABI in `crate::ffi`
pub fn generate_header() -> String {
    let mut code = banner("//");
    code.push_str("#ifndef MOBILECORE_H\n");
    code.push_str("#define MOBILECORE_H\n\n");
    code.push_str("#ifdef __cplusplus\n");
    code.push_str("extern \"C\" {\n");
    code.push_str("#endif\n\n");

    code.push_str("// Returns 0 on success, -1 on failure. NULL uses built-in defaults.\n");
    code.push_str("int mobilecore_init(const char *config_path);\n");
    code.push_str("void mobilecore_shutdown(void);\n");

    for group in Group::ALL {
        code.push_str(&format!("\n// {}\n", group.label()));
        for op in Operation::ALL.iter().filter(|op| op.group() == group) {
            code.push_str(&declaration(*op));
        }
    }

    code.push_str("\n// Every char * returned above must be released with this.\n");
    code.push_str("void mobilecore_free_string(char *s);\n\n");

    code.push_str("#ifdef __cplusplus\n");
    code.push_str("}\n");
    code.push_str("#endif\n\n");
    code.push_str("#endif // MOBILECORE_H\n");
    code
}
