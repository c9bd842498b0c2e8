use anyhow::Result;

use crate::commands::resolve_config;
use crate::service::{ComputationService, Operation, Value, ValueKind};

/// Turn command-line words into typed arguments for `op`
fn parse_args(op: Operation, raw: &[String]) -> Result<Vec<Value>> {
    let params = op.params();
    if raw.len() != params.len() {
        let usage = params
            .iter()
            .map(|p| format!("<{}>", p.name))
            .collect::<Vec<_>>()
            .join(" ");
        anyhow::bail!(
            "`{}` takes {} argument(s), got {}\n\nUsage: mobilecore call {} {}",
            op.name(),
            params.len(),
            raw.len(),
            op.name(),
            usage
        );
    }

    params
        .iter()
        .zip(raw)
        .map(|(param, word)| match param.kind {
            ValueKind::Number => word.trim().parse::<f64>().map(Value::Number).map_err(|_| {
                anyhow::anyhow!(
                    "argument `{}` of `{}` must be a number, got '{}'",
                    param.name,
                    op.name(),
                    word
                )
            }),
            ValueKind::Text => Ok(Value::Text(word.clone())),
        })
        .collect()
}

/// Invoke an operation the way a host would and return the boundary value
pub fn run(op_name: &str, raw_args: &[String], config_path: Option<&str>) -> Result<Value> {
    let op: Operation = op_name.parse()?;
    let args = parse_args(op, raw_args)?;
    let config = resolve_config(config_path)?;
    let service = ComputationService::native(config.limits)?;

    Ok(service.call(op, &args))
}

pub fn execute(op_name: &str, raw_args: &[String], config_path: Option<&str>) -> Result<()> {
    let value = run(op_name, raw_args, config_path)?;
    println!("{}", value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_by_kind() {
        let args = parse_args(Operation::CreateUser, &words(&["1.5", "Alice", "a@b.co"])).unwrap();
        assert_eq!(
            args,
            vec![
                Value::Number(1.5),
                Value::Text("Alice".to_string()),
                Value::Text("a@b.co".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(parse_args(Operation::Add, &words(&["1"])).is_err());
        assert!(parse_args(Operation::Add, &words(&["1", "two"])).is_err());
        assert!(parse_args(Operation::Greet, &words(&["extra"])).is_err());
    }

    #[test]
    fn test_negative_and_fractional_numbers() {
        let args = parse_args(Operation::Add, &words(&["-3.9", "2.9"])).unwrap();
        assert_eq!(args, vec![Value::Number(-3.9), Value::Number(2.9)]);
    }
}
