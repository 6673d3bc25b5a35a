//! Rust source emitter over a finished plan set.

use std::fmt::Write as _;

use indexmap::IndexMap;
use reqplan_plan::{CheckInstruction, ElementTarget, PlanId, PlanSet};

use super::naming::to_snake_case;

/// Header comment and shared helpers emitted once per file.
const PRELUDE: &str = r#"//! Generated required-field validators. Do not edit.

use serde_json::Value;

fn is_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}
"#;

/// Emitter configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Emit the generated-file header comment and prelude helpers.
    pub prelude: bool,
    /// Generate `pub` functions.
    pub public: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prelude: true,
            public: true,
        }
    }
}

/// Emits one function per plan, in registration order.
///
/// Each generated function takes a `serde_json::Value` and returns the
/// ordered violation paths; an ancestor plan is chained by seeding the
/// accumulator from the parent's function.
pub struct Emitter<'a> {
    plans: &'a PlanSet,
    config: Config,
    /// PlanId -> generated function name, collision-free.
    fn_names: IndexMap<PlanId, String>,
    output: String,
}

/// Render a plan set as Rust source with default configuration.
pub fn render(plans: &PlanSet) -> String {
    Emitter::new(plans, Config::default()).emit()
}

impl<'a> Emitter<'a> {
    pub fn new(plans: &'a PlanSet, config: Config) -> Self {
        Self {
            plans,
            config,
            fn_names: IndexMap::new(),
            output: String::new(),
        }
    }

    /// Emit source for every plan.
    pub fn emit(mut self) -> String {
        self.assign_fn_names();
        if self.config.prelude {
            self.output.push_str(PRELUDE);
        }
        for (id, _) in self.plans.iter() {
            self.emit_plan(id);
        }
        self.output
    }

    /// Pre-assign function names so forward references resolve, appending
    /// a numeric suffix when distinct types share a simple name.
    fn assign_fn_names(&mut self) {
        let mut used: IndexMap<String, u32> = IndexMap::new();
        for (id, plan) in self.plans.iter() {
            let base = to_snake_case(&plan.name);
            let name = match used.get_mut(&base) {
                None => {
                    used.insert(base.clone(), 1);
                    base
                }
                Some(count) => {
                    *count += 1;
                    format!("{base}_{count}")
                }
            };
            self.fn_names.insert(id, name);
        }
    }

    fn fn_name(&self, id: PlanId) -> &str {
        &self.fn_names[&id]
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn emit_plan(&mut self, id: PlanId) {
        let plan = self.plans.get(id);
        let fn_name = self.fn_name(id).to_string();
        let vis = if self.config.public { "pub " } else { "" };
        let type_name = plan.type_name.clone();
        let parent = plan.parent;
        let instructions = plan.instructions.clone();

        self.line("");
        let _ = writeln!(self.output, "/// Required-field checks for `{type_name}`.");
        let _ = writeln!(
            self.output,
            "{vis}fn {fn_name}(value: &Value) -> Vec<String> {{"
        );

        // Plans without own instructions reduce to their parent (or to
        // nothing); skip the accumulator so the output stays warning-free.
        if instructions.is_empty() {
            match parent {
                Some(parent) => {
                    let parent_fn = self.fn_name(parent).to_string();
                    self.line(&format!("    {parent_fn}(value)"));
                }
                None => self.line("    Vec::new()"),
            }
            self.line("}");
            return;
        }

        match parent {
            Some(parent) => {
                let parent_fn = self.fn_name(parent).to_string();
                self.line(&format!("    let mut violations = {parent_fn}(value);"));
            }
            None => self.line("    let mut violations = Vec::new();"),
        }
        self.line("    let obj = value.as_object();");

        for instr in &instructions {
            self.emit_instruction(instr);
        }

        self.line("    violations");
        self.line("}");
    }

    fn emit_instruction(&mut self, instr: &CheckInstruction) {
        let get = format!("obj.and_then(|o| o.get({:?}))", instr.accessor());
        match instr {
            CheckInstruction::RequiredPresence { field, .. } => {
                self.line(&format!("    if is_absent({get}) {{"));
                self.line(&format!("        violations.push({field:?}.to_string());"));
                self.line("    }");
            }
            CheckInstruction::RequiredNonEmpty { field, .. } => {
                self.line(&format!("    match {get} {{"));
                self.line("        Some(v) if !v.is_null() && !is_blank(v) => {}");
                self.line(&format!(
                    "        _ => violations.push({field:?}.to_string()),"
                ));
                self.line("    }");
            }
            CheckInstruction::NestedCheck { field, plan, .. } => {
                let target_fn = self.fn_name(*plan).to_string();
                self.line(&format!("    if let Some(v) = {get} {{"));
                self.line("        if !v.is_null() {");
                self.line(&format!("            for path in {target_fn}(v) {{"));
                self.line(&format!(
                    "                violations.push(format!(\"{{}}.{{}}\", {field:?}, path));"
                ));
                self.line("            }");
                self.line("        }");
                self.line("    }");
            }
            CheckInstruction::ElementCheck { field, target, .. } => {
                self.line(&format!("    if let Some(Value::Array(elems)) = {get} {{"));
                self.line("        for (i, elem) in elems.iter().enumerate() {");
                match target {
                    ElementTarget::Plan(plan) => {
                        let target_fn = self.fn_name(*plan).to_string();
                        self.line("            if elem.is_null() {");
                        self.line("                continue;");
                        self.line("            }");
                        self.line(&format!("            for path in {target_fn}(elem) {{"));
                        self.line(&format!(
                            "                violations.push(format!(\"{{}}[{{}}].{{}}\", {field:?}, i, path));"
                        ));
                        self.line("            }");
                    }
                    ElementTarget::Text => {
                        self.line(
                            "            if elem.is_null() || matches!(elem, Value::String(s) if s.is_empty()) {",
                        );
                        self.line(&format!(
                            "                violations.push(format!(\"{{}}[{{}}]\", {field:?}, i));"
                        ));
                        self.line("            }");
                    }
                }
                self.line("        }");
                self.line("    }");
            }
        }
    }
}
