//! Host-neutral declaration model.
//!
//! This module contains the raw input handed over by a host (the attribute
//! macro or the XML model schema): a declaration node with its members and the
//! directive's argument list. Nothing here is validated; that is the
//! extractor's job.

use std::fmt;

/// Kind tag of a declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// Reference-style class.
    Class,
    /// Struct with named fields.
    Struct,
    /// Struct with positional fields.
    TupleStruct,
    /// Enumeration.
    Enum,
    /// Protocol or trait.
    Protocol,
    /// Free function.
    Function,
    /// Untagged union.
    Union,
    /// Any other item (impl block, module, constant, ...).
    Other,
}

impl DeclKind {
    /// Parses a kind tag from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "class" => Some(Self::Class),
            "struct" => Some(Self::Struct),
            "tuple-struct" | "tuplestruct" | "tuple_struct" => Some(Self::TupleStruct),
            "enum" => Some(Self::Enum),
            "protocol" | "trait" => Some(Self::Protocol),
            "function" | "fn" => Some(Self::Function),
            "union" => Some(Self::Union),
            _ => None,
        }
    }

    /// Returns true for class-like nominal types with named stored members.
    #[must_use]
    pub const fn is_class_like(&self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }

    /// Returns the tag used in messages and schemas.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::TupleStruct => "tuple-struct",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Function => "function",
            Self::Union => "union",
            Self::Other => "item",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of a declaration node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// Stored property, optionally carrying an explicit type annotation.
    Stored {
        /// Property name.
        name: String,
        /// Literal type annotation text.
        type_annotation: Option<String>,
    },
    /// Computed property.
    Computed {
        /// Property name.
        name: String,
    },
    /// Method.
    Method {
        /// Method name.
        name: String,
    },
    /// Nested type declaration.
    NestedType {
        /// Type name.
        name: String,
    },
}

impl Member {
    /// Creates a stored property with a type annotation.
    pub fn stored(name: impl Into<String>, type_annotation: impl Into<String>) -> Self {
        Self::Stored {
            name: name.into(),
            type_annotation: Some(type_annotation.into()),
        }
    }

    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Stored { name, .. }
            | Self::Computed { name }
            | Self::Method { name }
            | Self::NestedType { name } => name,
        }
    }
}

/// Raw declaration node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Kind tag.
    pub kind: DeclKind,
    /// Declared name.
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<Member>,
}

impl Declaration {
    /// Creates a new declaration with no members.
    #[must_use]
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Adds a member.
    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Builder-style variant of [`Declaration::add_member`].
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }
}

/// Expression passed as a directive argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgExpr {
    /// Array literal.
    Array(Vec<ArgExpr>),
    /// String literal (unescaped content).
    Str(String),
    /// Any other expression, kept as source text.
    Other(String),
}

impl fmt::Display for ArgExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Self::Str(value) => write!(f, "{value:?}"),
            Self::Other(text) => f.write_str(text),
        }
    }
}

/// One directive argument, e.g. `nestedDTOs: ["Address"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveArgument {
    /// Argument label, if any.
    pub label: Option<String>,
    /// Argument expression.
    pub value: ArgExpr,
}

impl DirectiveArgument {
    /// Creates a labeled argument.
    pub fn labeled(label: impl Into<String>, value: ArgExpr) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    /// Creates an unlabeled argument.
    #[must_use]
    pub fn unlabeled(value: ArgExpr) -> Self {
        Self { label: None, value }
    }
}

/// One model entry of an XML model schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDef {
    /// Declaration node.
    pub declaration: Declaration,
    /// Directive arguments attached to the declaration.
    pub arguments: Vec<DirectiveArgument>,
}

/// Parsed XML model schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Package name (informational, emitted as a header comment).
    pub package: String,
    /// Models in document order.
    pub models: Vec<ModelDef>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            models: Vec::new(),
        }
    }

    /// Adds a model.
    pub fn add_model(&mut self, model: ModelDef) {
        self.models.push(model);
    }

    /// Looks up a model by declared name.
    #[must_use]
    pub fn get_model(&self, name: &str) -> Option<&ModelDef> {
        self.models.iter().find(|m| m.declaration.name == name)
    }

    /// Returns true if a model with the given name exists.
    #[must_use]
    pub fn has_model(&self, name: &str) -> bool {
        self.get_model(name).is_some()
    }
}
