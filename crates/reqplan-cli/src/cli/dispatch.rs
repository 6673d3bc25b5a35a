//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch -> command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::render::RenderArgs;

pub struct CompileParams {
    pub schema_path: Option<PathBuf>,
    pub roots: Vec<String>,
    pub format: String,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: m.get_one::<PathBuf>("schema_path").cloned(),
            roots: collect_roots(m),
            format: m
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| "text".to_string()),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            schema_path: p.schema_path,
            roots: p.roots,
            json: p.format == "json",
        }
    }
}

pub struct CheckParams {
    pub schema_path: Option<PathBuf>,
    pub instance_path: Option<PathBuf>,
    pub roots: Vec<String>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: m.get_one::<PathBuf>("schema_path").cloned(),
            instance_path: m.get_one::<PathBuf>("instance_path").cloned(),
            roots: collect_roots(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema_path: p.schema_path,
            instance_path: p.instance_path,
            roots: p.roots,
        }
    }
}

pub struct RenderParams {
    pub schema_path: Option<PathBuf>,
    pub roots: Vec<String>,
    pub output: Option<PathBuf>,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: m.get_one::<PathBuf>("schema_path").cloned(),
            roots: collect_roots(m),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            schema_path: p.schema_path,
            roots: p.roots,
            output: p.output,
        }
    }
}

fn collect_roots(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("root")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}
