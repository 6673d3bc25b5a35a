//! Human-readable plan dump for debugging and CLI output.

use std::fmt::Write as _;

use super::instruction::{CheckInstruction, ElementTarget};
use super::set::PlanSet;

/// Generate a human-readable dump of every plan, in registration order.
pub fn dump(plans: &PlanSet) -> String {
    let mut out = String::new();
    for (id, plan) in plans.iter() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{id} {} ({})", plan.name, plan.type_name);
        if let Some(parent) = plan.parent {
            let _ = writeln!(out, "  parent -> {parent} {}", plans.get(parent).name);
        }
        for (i, instr) in plan.instructions.iter().enumerate() {
            let _ = writeln!(out, "  [{i}] {}", render(instr, plans));
        }
    }
    out
}

fn render(instr: &CheckInstruction, plans: &PlanSet) -> String {
    let key = key_note(instr);
    match instr {
        CheckInstruction::RequiredPresence { field, .. } => format!("presence  {field}{key}"),
        CheckInstruction::RequiredNonEmpty { field, .. } => format!("non-empty {field}{key}"),
        CheckInstruction::NestedCheck { field, plan, .. } => {
            format!("nested    {field}{key} -> {plan} {}", plans.get(*plan).name)
        }
        CheckInstruction::ElementCheck { field, target, .. } => match target {
            ElementTarget::Plan(plan) => {
                format!("elements  {field}[i]{key} -> {plan} {}", plans.get(*plan).name)
            }
            ElementTarget::Text => format!("elements  {field}[i]{key} text"),
        },
    }
}

/// Accessor annotation, shown only when it differs from the field name.
fn key_note(instr: &CheckInstruction) -> String {
    if instr.accessor() != instr.field() {
        format!(" (key {})", instr.accessor())
    } else {
        String::new()
    }
}
