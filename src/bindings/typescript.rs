use super::banner;
use crate::config::ModuleConfig;
use crate::service::{Group, Operation};

/// TurboModule spec, operations grouped the same way as `mobilecore list`
pub fn generate_spec(module: &ModuleConfig) -> String {
    let mut code = banner("//");
    code.push_str("import type { TurboModule } from 'react-native';\n");
    code.push_str("import { TurboModuleRegistry } from 'react-native';\n\n");
    code.push_str("export interface Spec extends TurboModule {\n");

    let mut first = true;
    for group in Group::ALL {
        let ops: Vec<Operation> = Operation::ALL
            .iter()
            .copied()
            .filter(|op| op.group() == group)
            .collect();
        if ops.is_empty() {
            continue;
        }

        if !first {
            code.push('\n');
        }
        first = false;

        code.push_str(&format!("  // {}\n", group.label()));
        for op in ops {
            let params = op
                .params()
                .iter()
                .map(|p| format!("{}: {}", p.name, p.kind.to_ts_type()))
                .collect::<Vec<_>>()
                .join(", ");
            code.push_str(&format!(
                "  readonly {}: ({}) => {};\n",
                op.js_name(),
                params,
                op.returns().to_ts_type()
            ));
        }
    }

    code.push_str("}\n\n");
    code.push_str(&format!(
        "export default TurboModuleRegistry.getEnforcing<Spec>('{}');\n",
        module.name
    ));
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_registry_name() {
        let module = ModuleConfig {
            name: "NimBridge".to_string(),
            ..ModuleConfig::default()
        };
        let code = generate_spec(&module);
        assert!(code.ends_with("TurboModuleRegistry.getEnforcing<Spec>('NimBridge');\n"));
        assert!(code.contains("  readonly isPrime: (n: number) => number;\n"));
    }
}
