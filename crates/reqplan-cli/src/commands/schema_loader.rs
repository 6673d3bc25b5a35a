//! Schema loading and root resolution shared by commands.

use std::path::Path;

use reqplan_core::TypeGraph;

/// Load a schema document from disk.
pub fn load_schema(path: Option<&Path>) -> Result<TypeGraph, String> {
    let Some(path) = path else {
        return Err("schema path is required".to_string());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    TypeGraph::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Resolve the root set: explicit `--root` flags win, otherwise the
/// schema's marked types.
pub fn resolve_roots<'a>(
    graph: &'a TypeGraph,
    explicit: &'a [String],
) -> Result<Vec<&'a str>, String> {
    if !explicit.is_empty() {
        return Ok(explicit.iter().map(String::as_str).collect());
    }
    let marked = graph.roots();
    if marked.is_empty() {
        return Err(
            "no root types: pass --root or mark schema types with \"root\": true".to_string(),
        );
    }
    Ok(marked)
}

/// Resolve exactly one root for commands that validate a single instance.
pub fn resolve_single_root<'a>(
    graph: &'a TypeGraph,
    explicit: &'a [String],
) -> Result<&'a str, String> {
    let roots = resolve_roots(graph, explicit)?;
    match roots.as_slice() {
        [one] => Ok(one),
        _ => Err(format!(
            "expected exactly one root, got {}: pass a single --root",
            roots.len()
        )),
    }
}
