use std::path::PathBuf;

use reqplan_compiler::compile_roots;
use reqplan_plan::dump;

use super::schema_loader::{load_schema, resolve_roots};

pub struct CompileArgs {
    pub schema_path: Option<PathBuf>,
    pub roots: Vec<String>,
    pub json: bool,
}

pub fn run(args: CompileArgs) {
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

    if args.json {
        match serde_json::to_string_pretty(&plans) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", dump(&plans));
    }
}
