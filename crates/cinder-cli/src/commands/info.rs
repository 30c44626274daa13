//! Info command - show the version and the node kinds this build knows about.

use cinder_ast::{Node, NodeBox, Program};
use std::fmt::Write;

pub(crate) fn run() -> miette::Result<()> {
    print!("{}", render());
    Ok(())
}

/// Kind tags of the node variants shipped with `cinder-ast`.
fn builtin_kinds() -> Vec<&'static str> {
    let nodes: Vec<NodeBox> = vec![Box::new(Program::new())];
    nodes.iter().map(|node| node.class_name()).collect()
}

fn render() -> String {
    let kinds = builtin_kinds();
    tracing::debug!(count = kinds.len(), "collected built-in node kinds");

    let mut out = String::new();
    let _ = writeln!(out, "Cinder");
    let _ = writeln!(out, "======");
    let _ = writeln!(out);
    let _ = writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Node kinds:");
    for kind in kinds {
        let _ = writeln!(out, "  {}", kind);
    }
    out
}
