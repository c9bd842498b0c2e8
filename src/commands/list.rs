use anyhow::Result;
use colored::Colorize;

use crate::service::{Fallback, Group, Operation};

fn signature(op: Operation) -> String {
    let params = op
        .params()
        .iter()
        .map(|p| format!("{}: {}", p.name, p.kind.to_ts_type()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({}) -> {}", op.name(), params, op.returns().to_ts_type())
}

fn fallback_label(fallback: Fallback) -> &'static str {
    match fallback {
        Fallback::Zero => "0",
        Fallback::ErrorText => "\"Error: ...\"",
    }
}

/// One line per operation, grouped, without color codes
pub fn render() -> Vec<(Group, String)> {
    Operation::ALL
        .iter()
        .map(|op| {
            (
                op.group(),
                format!(
                    "{:<48} js: {:<14} on failure: {:<12} {}",
                    signature(*op),
                    op.js_name(),
                    fallback_label(op.fallback()),
                    op.summary()
                ),
            )
        })
        .collect()
}

pub fn execute() -> Result<()> {
    let lines = render();
    for group in Group::ALL {
        println!("{}", group.label().bold());
        for (_, line) in lines.iter().filter(|(g, _)| *g == group) {
            println!("    {}", line);
        }
    }
    Ok(())
}
