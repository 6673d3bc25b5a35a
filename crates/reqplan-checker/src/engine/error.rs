//! Validation failure signal.

/// Failure carrying every violation found in one pass.
///
/// One check call produces at most one of these no matter how many
/// fields are missing; the full ordered path list travels together.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing or empty required fields: {}", .paths.join(", "))]
pub struct ValidationError {
    paths: Vec<String>,
}

impl ValidationError {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    /// Violation paths in check order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}
