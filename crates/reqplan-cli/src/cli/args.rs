//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into
//! commands, so the same arg definition is reused across subcommands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema document (positional).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Schema document (JSON array of type descriptors)")
}

/// Instance document to validate (positional).
pub fn instance_path_arg() -> Arg {
    Arg::new("instance_path")
        .value_name("INSTANCE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Instance document to validate")
}

/// Root type selection (-r/--root, repeatable).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("TYPE")
        .action(ArgAction::Append)
        .help("Root type to compile (defaults to types marked \"root\": true)")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to a file instead of stdout")
}
