//! Declared field type shapes.
//!
//! A field's declared type is kept as literal text on the descriptor. This
//! module parses that text into a canonical [`TypeShape`] so the classifier can
//! compare shapes structurally instead of matching strings.
//!
//! Two spellings are understood and may be mixed:
//! - shorthand: `T`, `[T]`, `T?`, `[T]?`
//! - Rust: `T`, `Vec<T>`, `Option<T>`, `Option<Vec<T>>`
//!
//! Whitespace between tokens is ignored. Anything else is kept verbatim as
//! [`TypeShape::Opaque`].

use std::fmt;

/// Canonical shape of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// A plain type name, e.g. `Address`.
    Bare(String),
    /// A sequence of the inner shape.
    Array(Box<TypeShape>),
    /// An optional value of the inner shape.
    Optional(Box<TypeShape>),
    /// Type text outside the understood grammar, kept verbatim.
    Opaque(String),
}

/// Spelling used by a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// `[T]` and `T?`.
    #[default]
    Shorthand,
    /// `Vec<T>` and `Option<T>`.
    Rust,
}

impl TypeShape {
    /// Parses declared type text into a shape.
    ///
    /// Text that does not fit the grammar, including text where only an inner
    /// part is unrecognised, becomes [`TypeShape::Opaque`] holding the
    /// original (untrimmed) text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        parse_compact(&compact).unwrap_or_else(|| Self::Opaque(text.to_string()))
    }

    /// Returns the base type name when the shape is built only from
    /// [`TypeShape::Bare`], [`TypeShape::Array`] and [`TypeShape::Optional`].
    #[must_use]
    pub fn base_name(&self) -> Option<&str> {
        match self {
            Self::Bare(name) => Some(name),
            Self::Array(inner) | Self::Optional(inner) => inner.base_name(),
            Self::Opaque(_) => None,
        }
    }

    /// Returns a copy of this shape with the base name replaced.
    #[must_use]
    pub fn with_base_name(&self, name: &str) -> Self {
        match self {
            Self::Bare(_) => Self::Bare(name.to_string()),
            Self::Array(inner) => Self::Array(Box::new(inner.with_base_name(name))),
            Self::Optional(inner) => Self::Optional(Box::new(inner.with_base_name(name))),
            Self::Opaque(text) => Self::Opaque(text.clone()),
        }
    }

    /// Renders the shape in the given notation.
    #[must_use]
    pub fn render(&self, notation: Notation) -> String {
        match (self, notation) {
            (Self::Bare(name), _) => name.clone(),
            (Self::Opaque(text), _) => text.clone(),
            (Self::Array(inner), Notation::Shorthand) => format!("[{}]", inner.render(notation)),
            (Self::Optional(inner), Notation::Shorthand) => format!("{}?", inner.render(notation)),
            (Self::Array(inner), Notation::Rust) => format!("Vec<{}>", inner.render(notation)),
            (Self::Optional(inner), Notation::Rust) => format!("Option<{}>", inner.render(notation)),
        }
    }

    /// Renders the shape as Rust type text.
    #[must_use]
    pub fn rust_type(&self) -> String {
        self.render(Notation::Rust)
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Shorthand))
    }
}

impl Notation {
    /// Detects the notation of declared type text.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains('<') {
            Self::Rust
        } else {
            Self::Shorthand
        }
    }
}

fn parse_compact(text: &str) -> Option<TypeShape> {
    if let Some(inner) = text.strip_suffix('?') {
        return parse_compact(inner).map(|shape| TypeShape::Optional(Box::new(shape)));
    }
    if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        return parse_compact(inner).map(|shape| TypeShape::Array(Box::new(shape)));
    }
    if let Some(inner) = text.strip_prefix("Option<").and_then(|t| t.strip_suffix('>')) {
        return parse_compact(inner).map(|shape| TypeShape::Optional(Box::new(shape)));
    }
    if let Some(inner) = text.strip_prefix("Vec<").and_then(|t| t.strip_suffix('>')) {
        return parse_compact(inner).map(|shape| TypeShape::Array(Box::new(shape)));
    }
    is_identifier(text).then(|| TypeShape::Bare(text.to_string()))
}

/// Returns true if `text` is a plain identifier (`[A-Za-z_][A-Za-z0-9_]*`).
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
