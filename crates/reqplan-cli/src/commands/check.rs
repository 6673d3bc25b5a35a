use std::path::PathBuf;

use reqplan_checker::Checker;
use reqplan_compiler::Compiler;
use serde_json::Value;

use super::schema_loader::{load_schema, resolve_single_root};

pub struct CheckArgs {
    pub schema_path: Option<PathBuf>,
    pub instance_path: Option<PathBuf>,
    pub roots: Vec<String>,
}

pub fn run(args: CheckArgs) {
    let graph = match load_schema(args.schema_path.as_deref()) {
        Ok(graph) => graph,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let root = match resolve_single_root(&graph, &args.roots) {
        Ok(root) => root,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let mut compiler = Compiler::new(&graph);
    let plan = match compiler.compile_root(root) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let plans = compiler.into_plans();

    let instance = match load_instance(args.instance_path.as_deref()) {
        Ok(instance) => instance,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Checker::new(&plans).validate(plan, &instance) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

fn load_instance(path: Option<&std::path::Path>) -> Result<Value, String> {
    let Some(path) = path else {
        return Err("instance path is required".to_string());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))
}
