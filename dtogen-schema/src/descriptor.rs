//! Validated type descriptors.
//!
//! This module contains the immutable output of the extractor: the model's
//! name, its stored fields in declaration order, and the set of nested type
//! names that convert through their own transfer types.

/// Fixed suffix appended to a model name to name its transfer type.
pub const DTO_SUFFIX: &str = "DTO";

/// Returns the transfer type name for a model name.
#[must_use]
pub fn dto_name(model: &str) -> String {
    format!("{model}{DTO_SUFFIX}")
}

/// One stored field of a model type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Literal type annotation text, unmodified.
    pub declared_type: String,
}

impl FieldDescriptor {
    /// Creates a new field descriptor.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// A model type subject to generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Model type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Creates a new type descriptor.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Returns the transfer type name.
    #[must_use]
    pub fn dto_name(&self) -> String {
        dto_name(&self.name)
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Names of nested types that convert through their own transfer types.
///
/// Input order is preserved: classification tries names in this order and
/// error messages list them in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedNameSet {
    names: Vec<String>,
}

impl NestedNameSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Adds a name, ignoring duplicates.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    /// Returns true if the name is in the set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterates names in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NestedNameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

/// Extractor output: the descriptor plus its nested name set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedType {
    /// Validated descriptor.
    pub descriptor: TypeDescriptor,
    /// Declared nested convertible type names.
    pub nested: NestedNameSet,
}
