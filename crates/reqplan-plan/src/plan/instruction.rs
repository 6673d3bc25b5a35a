//! Check instruction definitions.

use serde::{Deserialize, Serialize};

use super::set::PlanId;

/// Target of an element check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementTarget {
    /// Elements are objects validated by the referenced plan.
    Plan(PlanId),
    /// Elements are text values checked for non-emptiness.
    Text,
}

/// One unit of validation logic.
///
/// `field` is the declared field name used verbatim in violation paths;
/// `accessor` is the instance key the checker reads. The compiler copies
/// the accessor through without interpreting it.
///
/// The required marker gates only `RequiredPresence`/`RequiredNonEmpty`.
/// `NestedCheck`/`ElementCheck` are emitted independent of the marker:
/// required-ness asks "did you forget to set this", nested checks ask
/// "is what's inside consistent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInstruction {
    /// Violation if the accessor yields absence.
    RequiredPresence { field: String, accessor: String },
    /// Violation if the accessor yields absence or a zero-length value.
    /// Absent and empty are indistinguishable in output: same path,
    /// same kind.
    RequiredNonEmpty { field: String, accessor: String },
    /// If the value is present, run the nested plan and prefix each
    /// returned path with `<field>.`.
    NestedCheck {
        field: String,
        accessor: String,
        plan: PlanId,
    },
    /// If the container is present, iterate elements in enumeration order
    /// with a zero-based index. Plan targets prefix nested paths with
    /// `<field>[<index>].`; text targets emit `<field>[<index>]` for each
    /// absent-or-empty element.
    ElementCheck {
        field: String,
        accessor: String,
        target: ElementTarget,
    },
}

impl CheckInstruction {
    /// Field name as it appears in violation paths.
    pub fn field(&self) -> &str {
        match self {
            Self::RequiredPresence { field, .. }
            | Self::RequiredNonEmpty { field, .. }
            | Self::NestedCheck { field, .. }
            | Self::ElementCheck { field, .. } => field,
        }
    }

    /// Instance key the checker reads.
    pub fn accessor(&self) -> &str {
        match self {
            Self::RequiredPresence { accessor, .. }
            | Self::RequiredNonEmpty { accessor, .. }
            | Self::NestedCheck { accessor, .. }
            | Self::ElementCheck { accessor, .. } => accessor,
        }
    }

    /// The plan this instruction references, if any.
    pub fn referenced_plan(&self) -> Option<PlanId> {
        match self {
            Self::NestedCheck { plan, .. } => Some(*plan),
            Self::ElementCheck {
                target: ElementTarget::Plan(plan),
                ..
            } => Some(*plan),
            _ => None,
        }
    }
}
