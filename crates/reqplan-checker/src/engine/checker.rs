//! Plan execution against live instance values.

use serde_json::Value;

use reqplan_plan::{CheckInstruction, ElementTarget, PlanId, PlanSet};

use super::error::ValidationError;

/// Executes compiled plans against instance values.
///
/// Holds only a borrow of the immutable plan set; no state is carried
/// across calls, so concurrent checks over one set are independent.
pub struct Checker<'a> {
    plans: &'a PlanSet,
}

impl<'a> Checker<'a> {
    pub fn new(plans: &'a PlanSet) -> Self {
        Self { plans }
    }

    /// Run a plan against an instance, collecting every violation path.
    ///
    /// The ancestor chain runs first, unprefixed, into the same
    /// accumulator; own instructions follow in plan order.
    pub fn check(&self, plan: PlanId, instance: &Value) -> Vec<String> {
        let mut violations = Vec::new();
        self.run(plan, instance, &mut violations);
        violations
    }

    /// Like `check`, but surfaces a non-empty result as a single failure
    /// carrying the full ordered list.
    pub fn validate(&self, plan: PlanId, instance: &Value) -> Result<(), ValidationError> {
        let violations = self.check(plan, instance);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    fn run(&self, id: PlanId, instance: &Value, out: &mut Vec<String>) {
        let plan = self.plans.get(id);
        if let Some(parent) = plan.parent {
            self.run(parent, instance, out);
        }
        for instr in &plan.instructions {
            self.exec(instr, instance, out);
        }
    }

    fn exec(&self, instr: &CheckInstruction, instance: &Value, out: &mut Vec<String>) {
        let value = field_value(instance, instr.accessor());
        match instr {
            CheckInstruction::RequiredPresence { field, .. } => {
                if is_absent(value) {
                    out.push(field.clone());
                }
            }
            CheckInstruction::RequiredNonEmpty { field, .. } => {
                // Absent and zero-length are indistinguishable in output:
                // same path, same kind.
                match value {
                    Some(v) if !v.is_null() && !is_empty(v) => {}
                    _ => out.push(field.clone()),
                }
            }
            CheckInstruction::NestedCheck { field, plan, .. } => {
                if let Some(v) = value.filter(|v| !v.is_null()) {
                    for path in self.check(*plan, v) {
                        out.push(format!("{field}.{path}"));
                    }
                }
            }
            CheckInstruction::ElementCheck { field, target, .. } => {
                let Some(Value::Array(elems)) = value else {
                    return;
                };
                for (i, elem) in elems.iter().enumerate() {
                    match target {
                        ElementTarget::Plan(plan) => {
                            // The presence guard applies per element.
                            if elem.is_null() {
                                continue;
                            }
                            for path in self.check(*plan, elem) {
                                out.push(format!("{field}[{i}].{path}"));
                            }
                        }
                        ElementTarget::Text => {
                            if elem.is_null() || elem.as_str().is_some_and(str::is_empty) {
                                out.push(format!("{field}[{i}]"));
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Read a field's value by accessor key. Non-object instances have no
/// fields, so every accessor yields absence.
fn field_value<'v>(instance: &'v Value, key: &str) -> Option<&'v Value> {
    instance.as_object().and_then(|o| o.get(key))
}

fn is_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Zero-length text or container.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}
