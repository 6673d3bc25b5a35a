//! Name-indexed type graph.
//!
//! The schema document is a JSON array of type descriptors. Loading builds
//! an ordered name -> descriptor map; declaration order is preserved so
//! compilation output is reproducible across runs.

use indexmap::IndexMap;

use crate::descriptor::TypeDescriptor;

/// Error during schema loading.
#[derive(Debug)]
pub enum SchemaError {
    Json(serde_json::Error),
    DuplicateType(String),
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::DuplicateType(name) => write!(f, "duplicate type definition: {name}"),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::DuplicateType(_) => None,
        }
    }
}

/// Ordered collection of type descriptors, keyed by qualified name.
///
/// Immutable after loading. The compiler borrows descriptors from here and
/// never mutates them.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    types: IndexMap<String, TypeDescriptor>,
}

impl TypeGraph {
    /// Parse a schema document (JSON array of type descriptors).
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: Vec<TypeDescriptor> = serde_json::from_str(json).map_err(SchemaError::Json)?;
        Self::from_descriptors(raw)
    }

    /// Build a graph from already-deserialized descriptors.
    pub fn from_descriptors(
        descriptors: Vec<TypeDescriptor>,
    ) -> Result<Self, SchemaError> {
        let mut types = IndexMap::with_capacity(descriptors.len());
        for td in descriptors {
            let name = td.name.clone();
            if types.insert(name.clone(), td).is_some() {
                return Err(SchemaError::DuplicateType(name));
            }
        }
        Ok(Self { types })
    }

    /// Look up a type descriptor by qualified name.
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Names of types carrying the root marker, in declaration order.
    pub fn roots(&self) -> Vec<&str> {
        self.types
            .values()
            .filter(|td| td.root)
            .map(|td| td.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
