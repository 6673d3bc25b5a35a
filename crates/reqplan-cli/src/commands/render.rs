use std::path::PathBuf;

use reqplan_compiler::codegen::render;
use reqplan_compiler::compile_roots;

use super::schema_loader::{load_schema, resolve_roots};

pub struct RenderArgs {
    pub schema_path: Option<PathBuf>,
    pub roots: Vec<String>,
    pub output: Option<PathBuf>,
}

pub fn run(args: RenderArgs) {
    let graph = match load_schema(args.schema_path.as_deref()) {
        Ok(graph) => graph,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let roots = match resolve_roots(&graph, &args.roots) {
        Ok(roots) => roots,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let plans = match compile_roots(&graph, &roots) {
        Ok(plans) => plans,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let source = render(&plans);
    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, source) {
                eprintln!("error: cannot write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
        None => print!("{source}"),
    }
}
