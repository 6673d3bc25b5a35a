//! Core compiler state and entry points.

use reqplan_core::{FieldDescriptor, TypeDescriptor, TypeGraph};
use reqplan_plan::{CheckInstruction, ElementTarget, PlanId, PlanSet, plan_name};

use crate::classify::{ElementIssue, ElementKind, FieldShape, classify};

use super::error::CompileError;

/// Compiler state for one run: a borrowed type graph and the plan set
/// being built.
///
/// The graph is never mutated; the plan set is the single piece of
/// mutable state and lives exactly as long as the run.
pub struct Compiler<'a> {
    graph: &'a TypeGraph,
    plans: PlanSet,
}

/// Compile every root in order and return the finished plan set.
pub fn compile_roots(graph: &TypeGraph, roots: &[&str]) -> Result<PlanSet, CompileError> {
    let mut compiler = Compiler::new(graph);
    for root in roots {
        compiler.compile_root(root)?;
    }
    Ok(compiler.into_plans())
}

impl<'a> Compiler<'a> {
    pub fn new(graph: &'a TypeGraph) -> Self {
        Self {
            graph,
            plans: PlanSet::new(),
        }
    }

    /// The plan set built so far.
    pub fn plans(&self) -> &PlanSet {
        &self.plans
    }

    /// Finish the run and take ownership of the plan set.
    pub fn into_plans(self) -> PlanSet {
        self.plans
    }

    /// Compile one root type and return its plan id.
    ///
    /// Idempotent: repeated calls for an already-compiled type return the
    /// existing id without re-registering anything. Roots must name
    /// concrete types in the graph.
    pub fn compile_root(&mut self, type_name: &str) -> Result<PlanId, CompileError> {
        let graph = self.graph;
        let td = graph
            .get(type_name)
            .ok_or_else(|| CompileError::UnknownRoot(type_name.to_string()))?;
        self.compile(td)?
            .ok_or_else(|| CompileError::AbstractRoot(type_name.to_string()))
    }

    /// Compile a type, registering its plan on first visit.
    ///
    /// Returns `None` for abstract types so callers skip ancestor
    /// chaining and nested-check insertion. An already-registered type
    /// (including a reservation made higher up the recursion) returns its
    /// existing id; the registry is the sole deduplication mechanism.
    ///
    /// The derived name is reserved *before* field recursion, so
    /// self-referential and mutually-referential graphs resolve to the
    /// reserved id as a forward reference and terminate.
    pub fn compile(&mut self, td: &TypeDescriptor) -> Result<Option<PlanId>, CompileError> {
        if !td.is_concrete() {
            return Ok(None);
        }
        if let Some(id) = self.plans.lookup(&td.name) {
            return Ok(Some(id));
        }

        let id = self.plans.reserve(&td.name, plan_name(td.simple_name()));

        let parent = self.compile_parent(td)?;
        let instructions = self.compile_fields(td)?;

        self.plans.finish(id, parent, instructions);
        Ok(Some(id))
    }

    /// Resolve the ancestor plan, if the type has a concrete parent.
    fn compile_parent(&mut self, td: &TypeDescriptor) -> Result<Option<PlanId>, CompileError> {
        let graph = self.graph;
        match &td.parent {
            None => Ok(None),
            Some(parent_name) => {
                let parent_td =
                    graph
                        .get(parent_name)
                        .ok_or_else(|| CompileError::UnknownParent {
                            type_name: td.name.clone(),
                            parent: parent_name.clone(),
                        })?;
                self.compile(parent_td)
            }
        }
    }

    /// Instructions for the type's directly-declared fields, in
    /// declaration order.
    fn compile_fields(
        &mut self,
        td: &TypeDescriptor,
    ) -> Result<Vec<CheckInstruction>, CompileError> {
        let mut instructions = Vec::new();
        for field in &td.fields {
            self.compile_field(td, field, &mut instructions)?;
        }
        Ok(instructions)
    }

    fn compile_field(
        &mut self,
        td: &TypeDescriptor,
        field: &FieldDescriptor,
        out: &mut Vec<CheckInstruction>,
    ) -> Result<(), CompileError> {
        let shape = classify(&field.ty).map_err(|issue| match issue {
            ElementIssue::Unbound => CompileError::UnboundElement {
                type_name: td.name.clone(),
                field: field.name.clone(),
            },
            ElementIssue::Nested => CompileError::NestedElement {
                type_name: td.name.clone(),
                field: field.name.clone(),
            },
        })?;

        // Primitives generate nothing, marker or not.
        if matches!(shape, FieldShape::Scalar) {
            return Ok(());
        }

        if field.required {
            let instr = match shape {
                FieldShape::Nested(_) => CheckInstruction::RequiredPresence {
                    field: field.name.clone(),
                    accessor: field.accessor_key().to_string(),
                },
                _ => CheckInstruction::RequiredNonEmpty {
                    field: field.name.clone(),
                    accessor: field.accessor_key().to_string(),
                },
            };
            out.push(instr);
        }

        // Nested and element checks are independent of the required
        // marker: the marker gates "did you forget to set this", not
        // "is what's inside consistent".
        match shape {
            FieldShape::Nested(target) => {
                if let Some(plan) = self.compile_reference(td, field, target)? {
                    out.push(CheckInstruction::NestedCheck {
                        field: field.name.clone(),
                        accessor: field.accessor_key().to_string(),
                        plan,
                    });
                }
            }
            FieldShape::Ordered(elem) | FieldShape::Unordered(elem) | FieldShape::Array(elem) => {
                match elem {
                    ElementKind::Scalar => {}
                    ElementKind::Text => out.push(CheckInstruction::ElementCheck {
                        field: field.name.clone(),
                        accessor: field.accessor_key().to_string(),
                        target: ElementTarget::Text,
                    }),
                    ElementKind::Object(target) => {
                        if let Some(plan) = self.compile_reference(td, field, target)? {
                            out.push(CheckInstruction::ElementCheck {
                                field: field.name.clone(),
                                accessor: field.accessor_key().to_string(),
                                target: ElementTarget::Plan(plan),
                            });
                        }
                    }
                }
            }
            FieldShape::Scalar | FieldShape::Text => {}
        }

        Ok(())
    }

    /// Compile a type referenced from a field (nested object or container
    /// element).
    fn compile_reference(
        &mut self,
        td: &TypeDescriptor,
        field: &FieldDescriptor,
        target: &str,
    ) -> Result<Option<PlanId>, CompileError> {
        let graph = self.graph;
        let target_td = graph
            .get(target)
            .ok_or_else(|| CompileError::UnknownFieldType {
                referrer: td.name.clone(),
                field: field.name.clone(),
                type_name: target.to_string(),
            })?;
        self.compile(target_td)
    }
}
