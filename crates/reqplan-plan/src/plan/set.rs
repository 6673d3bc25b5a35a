//! Plan arena and per-run registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::instruction::CheckInstruction;

/// Suffix appended to a type's simple name to derive its plan name.
pub const PLAN_SUFFIX: &str = "Validator";

/// Derive a plan name from a type's simple name.
pub fn plan_name(simple_name: &str) -> String {
    format!("{simple_name}{PLAN_SUFFIX}")
}

/// Index of a plan in a `PlanSet` arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlanId(pub u16);

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Compiled, named, ordered set of check instructions for one type.
///
/// Immutable once its registry slot is finished. A plan with zero
/// instructions is still a valid plan: every concrete type that appears
/// as a field gets one, so nested recursion always has a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPlan {
    /// Derived name: simple type name + `Validator`.
    pub name: String,
    /// Qualified name of the compiled type.
    pub type_name: String,
    /// Ancestor plan, run first (unprefixed, same accumulator) at check
    /// time.
    pub parent: Option<PlanId>,
    /// Own-field instructions in declaration order.
    pub instructions: Vec<CheckInstruction>,
}

impl ValidationPlan {
    /// Whether this plan performs no checks at all, own or inherited.
    pub fn is_trivial(&self) -> bool {
        self.parent.is_none() && self.instructions.is_empty()
    }
}

/// Append-only arena of validation plans with a name-keyed registry.
///
/// One compiler run builds exactly one `PlanSet`; afterwards it is
/// immutable and may be shared freely across checker invocations. It is
/// not a cross-run cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanSet {
    plans: Vec<ValidationPlan>,
    by_type: IndexMap<String, PlanId>,
}

impl PlanSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a registry slot for `type_name` before recursing into its
    /// fields. Recursive references observed mid-compilation resolve to
    /// the reserved id as a forward reference, so cyclic type graphs
    /// terminate.
    ///
    /// Panics if the type is already registered; callers must check
    /// `lookup` first.
    pub fn reserve(&mut self, type_name: &str, name: String) -> PlanId {
        assert!(
            !self.by_type.contains_key(type_name),
            "type compiled twice: {type_name}"
        );
        let id = PlanId(self.plans.len() as u16);
        self.plans.push(ValidationPlan {
            name,
            type_name: type_name.to_string(),
            parent: None,
            instructions: Vec::new(),
        });
        self.by_type.insert(type_name.to_string(), id);
        id
    }

    /// Fill a reserved slot with its finished contents.
    pub fn finish(
        &mut self,
        id: PlanId,
        parent: Option<PlanId>,
        instructions: Vec<CheckInstruction>,
    ) {
        let plan = &mut self.plans[id.0 as usize];
        plan.parent = parent;
        plan.instructions = instructions;
    }

    /// Registry lookup by qualified type name.
    pub fn lookup(&self, type_name: &str) -> Option<PlanId> {
        self.by_type.get(type_name).copied()
    }

    /// Fetch a plan by id. Ids are only minted by this set, so a miss is
    /// a caller bug.
    pub fn get(&self, id: PlanId) -> &ValidationPlan {
        &self.plans[id.0 as usize]
    }

    /// Iterate plans in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PlanId, &ValidationPlan)> {
        self.plans
            .iter()
            .enumerate()
            .map(|(i, plan)| (PlanId(i as u16), plan))
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
