//! Resolved type descriptors.
//!
//! One closed sum type over every shape the package loader can hand us.
//! Consumers match exhaustively, so a new variant is a compile error at every
//! dispatch site rather than a silently mis-rendered field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fully resolved source type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// Predeclared primitive (`string`, `int64`, `bool`, ...).
    Basic { basic: BasicKind },

    /// Anonymous struct literal type.
    Struct { fields: Vec<Field> },

    /// `map[K]V`.
    Map { key: Box<Type>, value: Box<Type> },

    /// `[]T`.
    Slice { elem: Box<Type> },

    /// `[N]T`.
    Array { len: u64, elem: Box<Type> },

    /// Reference to a declared type, local or external.
    Named(NamedType),

    /// `*T`.
    Pointer { elem: Box<Type> },

    /// Interface type (method set and/or embedded constraint terms).
    Interface(Interface),

    /// Type parameter of a generic declaration.
    TypeParam(TypeParam),

    /// Constraint union (`~string | int`). Only appears as an interface embedding.
    Union { terms: Vec<Term> },

    /// Function signature.
    Signature,

    /// `chan T`.
    Chan { elem: Box<Type> },
}

/// Predeclared primitive kinds.
///
/// `Byte` and `Rune` are kept apart from `Uint8` and `Int32`: the loader reports
/// the alias that was written, and byte-ness changes the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Byte,
    Rune,
    UnsafePointer,
}

impl BasicKind {
    /// Source-language spelling.
    pub fn name(self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::String => "string",
            BasicKind::Byte => "byte",
            BasicKind::Rune => "rune",
            BasicKind::UnsafePointer => "unsafe.Pointer",
        }
    }

    /// Numeric kinds. `Byte` is deliberately excluded; see [`BasicKind::Byte`].
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            BasicKind::Int
                | BasicKind::Int8
                | BasicKind::Int16
                | BasicKind::Int32
                | BasicKind::Int64
                | BasicKind::Uint
                | BasicKind::Uint8
                | BasicKind::Uint16
                | BasicKind::Uint32
                | BasicKind::Uint64
                | BasicKind::Uintptr
                | BasicKind::Float32
                | BasicKind::Float64
                | BasicKind::Complex64
                | BasicKind::Complex128
                | BasicKind::Rune
        )
    }
}

/// Reference to a declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    /// Import path of the declaring package. `None` for universe types (`error`).
    #[serde(default)]
    pub package: Option<String>,
    pub name: String,
    /// Underlying shape. Only required for types declared outside the
    /// generated package; local references are resolved through the scope.
    #[serde(default)]
    pub underlying: Option<Box<Type>>,
}

impl NamedType {
    /// `import/path.Name`, or the bare name for universe types.
    pub fn qualified_name(&self) -> String {
        match &self.package {
            Some(pkg) => format!("{}.{}", pkg, self.name),
            None => self.name.clone(),
        }
    }
}

/// Struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    /// Raw struct tag, without the surrounding backquotes.
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub embedded: bool,
    /// Import path of the package declaring the field.
    #[serde(default)]
    pub package: Option<String>,
}

/// Interface body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub embedded: Vec<Type>,
    #[serde(default)]
    pub methods: Vec<String>,
}

impl Interface {
    /// `interface{}` / `any`.
    pub fn is_empty(&self) -> bool {
        self.embedded.is_empty() && self.methods.is_empty()
    }
}

/// One term of a constraint union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// `~T` (underlying-type match). Has no effect on the emitted type.
    #[serde(default)]
    pub tilde: bool,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// Type parameter with its constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    pub constraint: Box<Type>,
}

impl Type {
    pub fn basic(basic: BasicKind) -> Self {
        Type::Basic { basic }
    }

    pub fn string() -> Self {
        Type::basic(BasicKind::String)
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Reference to a type resolved through the package scope.
    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        Type::Named(NamedType {
            package: Some(package.into()),
            name: name.into(),
            underlying: None,
        })
    }

    /// Reference to an external type, carrying its underlying shape.
    pub fn external(package: impl Into<String>, name: impl Into<String>, underlying: Type) -> Self {
        Type::Named(NamedType {
            package: Some(package.into()),
            name: name.into(),
            underlying: Some(Box::new(underlying)),
        })
    }

    pub fn interface(embedded: Vec<Type>) -> Self {
        Type::Interface(Interface {
            embedded,
            methods: Vec::new(),
        })
    }

    pub fn union(types: Vec<Type>) -> Self {
        Type::Union {
            terms: types
                .into_iter()
                .map(|ty| Term { tilde: false, ty })
                .collect(),
        }
    }

    pub fn type_param(name: impl Into<String>, constraint: Type) -> Self {
        Type::TypeParam(TypeParam {
            name: name.into(),
            constraint: Box::new(constraint),
        })
    }

    /// Short shape name for diagnostics ("struct", "map", "chan", ...).
    pub fn shape(&self) -> &'static str {
        match self {
            Type::Basic { .. } => "basic",
            Type::Struct { .. } => "struct",
            Type::Map { .. } => "map",
            Type::Slice { .. } => "slice",
            Type::Array { .. } => "array",
            Type::Named(_) => "named",
            Type::Pointer { .. } => "pointer",
            Type::Interface(_) => "interface",
            Type::TypeParam(_) => "type parameter",
            Type::Union { .. } => "union",
            Type::Signature => "func",
            Type::Chan { .. } => "chan",
        }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: String::new(),
            embedded: false,
            package: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Mark as embedded in the given package.
    pub fn embedded_in(mut self, package: impl Into<String>) -> Self {
        self.embedded = true;
        self.package = Some(package.into());
        self
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic { basic } => f.write_str(basic.name()),
            Type::Struct { fields } => {
                f.write_str("struct{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    if field.embedded {
                        write!(f, "{}", field.ty)?;
                    } else {
                        write!(f, "{} {}", field.name, field.ty)?;
                    }
                }
                f.write_str("}")
            }
            Type::Map { key, value } => write!(f, "map[{key}]{value}"),
            Type::Slice { elem } => write!(f, "[]{elem}"),
            Type::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Type::Named(named) => f.write_str(&named.qualified_name()),
            Type::Pointer { elem } => write!(f, "*{elem}"),
            Type::Interface(iface) => {
                if iface.is_empty() {
                    return f.write_str("interface{}");
                }
                f.write_str("interface{")?;
                let parts = iface
                    .embedded
                    .iter()
                    .map(|t| t.to_string())
                    .chain(iface.methods.iter().map(|m| format!("{m}()")));
                for (i, part) in parts.enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    f.write_str(&part)?;
                }
                f.write_str("}")
            }
            Type::TypeParam(param) => f.write_str(&param.name),
            Type::Union { terms } => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    if term.tilde {
                        f.write_str("~")?;
                    }
                    write!(f, "{}", term.ty)?;
                }
                Ok(())
            }
            Type::Signature => f.write_str("func()"),
            Type::Chan { elem } => write!(f, "chan {elem}"),
        }
    }
}
