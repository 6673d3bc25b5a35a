//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("reqplan")
        .about("Required-field validation plans compiled from type schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(check_command())
        .subcommand(render_command())
}

/// Compile a schema and print the resulting plan set.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile a schema into validation plans")
        .after_help(
            r#"EXAMPLES:
  reqplan compile schema.json                  # all marked roots, text dump
  reqplan compile schema.json -r shop.Order    # explicit root
  reqplan compile schema.json --format json    # machine-readable plans"#,
        )
        .arg(schema_path_arg())
        .arg(root_arg())
        .arg(format_arg())
}

/// Validate an instance document against a compiled plan.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate an instance document against a root type")
        .after_help(
            r#"EXAMPLES:
  reqplan check schema.json order.json               # single marked root
  reqplan check schema.json order.json -r shop.Order # explicit root

Silent on success; missing or empty required fields are reported to
stderr with exit code 1."#,
        )
        .arg(schema_path_arg())
        .arg(instance_path_arg())
        .arg(root_arg())
}

/// Render compiled plans as Rust source.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render compiled plans as Rust validator source")
        .after_help(
            r#"EXAMPLES:
  reqplan render schema.json                   # source to stdout
  reqplan render schema.json -o validators.rs  # write to a file"#,
        )
        .arg(schema_path_arg())
        .arg(root_arg())
        .arg(output_arg())
}
