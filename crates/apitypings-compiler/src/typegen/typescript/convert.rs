//! Source type to TypeScript expression mapping.

use apitypings_core::utils::is_exported;
use apitypings_core::{BasicKind, Interface, NamedType, Type, TypeParam};
use tracing::warn;

use super::Generator;

const LINT_ANY: &str = "eslint-disable-next-line @typescript-eslint/no-explicit-any";

/// Errors from mapping a single type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("only empty interface types are supported, found `{ty}`")]
    NonEmptyInterface { ty: String },

    #[error("type parameter {param} must be constrained by an interface, found `{constraint}`")]
    InvalidConstraint { param: String, constraint: String },

    #[error("embedded anonymous struct `{ty}` cannot be extended")]
    AnonymousEmbedded { ty: String },

    #[error("named type {name:?} has no underlying type")]
    UnresolvedNamed { name: String },

    #[error("unsupported type `{ty}`")]
    Unsupported { ty: String },
}

/// A generic parameter introduced by a type parameter reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericBinding {
    pub symbol: String,
    /// Union expression after `extends`.
    pub constraint: String,
}

/// Result of mapping one source type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsType {
    /// TypeScript type expression.
    pub value: String,
    /// Render the field (or alias) with `?`.
    pub optional: bool,
    /// Generic parameters the enclosing declaration must introduce.
    pub generics: Vec<GenericBinding>,
    /// Comment lines to place above the declaring line.
    pub annotations: Vec<String>,
}

impl TsType {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    fn annotated(mut self, text: impl Into<String>) -> Self {
        self.annotations.push(text.into());
        self
    }

    /// Fold another mapping's annotations and generics into this one.
    fn absorb(&mut self, other: TsType) {
        for annotation in other.annotations {
            if !self.annotations.contains(&annotation) {
                self.annotations.push(annotation);
            }
        }
        for binding in other.generics {
            if !self.generics.contains(&binding) {
                self.generics.push(binding);
            }
        }
    }
}

impl Generator<'_> {
    /// Map a source type to its TypeScript spelling.
    pub fn ts_type(&self, ty: &Type) -> Result<TsType, MapError> {
        match ty {
            Type::Basic { basic } => self.basic_type(*basic, ty),
            Type::Struct { .. } => Ok(TsType::new("any")
                .annotated(format!("Embedded anonymous struct, please fix by naming it: {ty}"))
                .annotated(LINT_ANY)),
            Type::Map { key, value } => {
                let key = self.ts_type(key)?;
                let value = self.ts_type(value)?;
                let mut out = TsType::new(format!("Record<{}, {}>", key.value, value.value));
                out.absorb(key);
                out.absorb(value);
                Ok(out)
            }
            Type::Slice { elem } | Type::Array { elem, .. } => {
                if is_byte(elem) {
                    return Ok(TsType::new("string"));
                }
                // Element optionality stays with the element.
                let elem = self.ts_type(elem)?;
                let mut out = TsType::new(format!("{}[]", wrap_union(&elem.value)));
                out.absorb(elem);
                Ok(out)
            }
            Type::Named(named) => self.named_type(named),
            Type::Pointer { elem } => {
                let mut out = self.ts_type(elem)?;
                out.optional = true;
                Ok(out)
            }
            Type::Interface(iface) => {
                if !iface.is_empty() {
                    return Err(MapError::NonEmptyInterface { ty: ty.to_string() });
                }
                Ok(TsType::new("any").annotated(LINT_ANY))
            }
            Type::TypeParam(param) => self.type_param(param),
            Type::Union { .. } | Type::Signature | Type::Chan { .. } => {
                Err(MapError::Unsupported { ty: ty.to_string() })
            }
        }
    }

    fn basic_type(&self, basic: BasicKind, ty: &Type) -> Result<TsType, MapError> {
        if basic.is_numeric() {
            return Ok(TsType::new("number"));
        }
        match basic {
            BasicKind::Bool => Ok(TsType::new("boolean")),
            BasicKind::Byte => Ok(TsType::new("number").annotated("This represents a single byte")),
            BasicKind::UnsafePointer => Err(MapError::Unsupported { ty: ty.to_string() }),
            other => Ok(TsType::new(other.name())),
        }
    }

    fn named_type(&self, named: &NamedType) -> Result<TsType, MapError> {
        let qualified = named.qualified_name();
        if let Some(known) = self.config.known_types.get(&qualified) {
            return Ok(TsType {
                value: known.expr.clone(),
                optional: known.optional,
                ..TsType::default()
            });
        }

        if self.local_declaration(named).is_some() {
            if self.ignored.contains(&named.name) || !is_exported(&named.name) {
                warn!(name = %named.name, "reference to a type that is not generated");
            }
            return Ok(TsType::new(named.name.clone()));
        }

        let Some(underlying) = named.underlying.as_deref() else {
            return Err(MapError::UnresolvedNamed { name: qualified });
        };
        if let Type::Struct { .. } = underlying {
            return Ok(TsType::new("any")
                .annotated(format!("Named type {qualified:?} unknown, using \"any\""))
                .annotated(LINT_ANY));
        }

        let mut out = self.ts_type(underlying)?;
        out.annotations.insert(
            0,
            format!("This is likely an enum in an external package ({qualified:?})"),
        );
        Ok(out)
    }

    fn type_param(&self, param: &TypeParam) -> Result<TsType, MapError> {
        let iface = self
            .constraint_interface(&param.constraint)
            .ok_or_else(|| MapError::InvalidConstraint {
                param: param.name.clone(),
                constraint: param.constraint.to_string(),
            })?;

        // Named constraints without a single type set are referenced by name.
        let constraint = match param.constraint.as_ref() {
            _ if iface.embedded.len() == 1 => self.union_type(&iface.embedded[0])?,
            _ if iface.is_empty() => TsType::new("any"),
            Type::Named(named) => {
                warn!(
                    param = %param.name,
                    constraint = %named.name,
                    "constraint is not a union, referencing it by name"
                );
                TsType::new(named.name.clone())
            }
            _ => TsType::new("any"),
        };

        let mut out = TsType::new(param.name.clone());
        out.generics.push(GenericBinding {
            symbol: param.name.clone(),
            constraint: constraint.value.clone(),
        });
        out.absorb(constraint);
        Ok(out)
    }

    /// Resolve a constraint to its interface body, through a named constraint type.
    fn constraint_interface<'t>(&'t self, constraint: &'t Type) -> Option<&'t Interface> {
        match constraint {
            Type::Interface(iface) => Some(iface),
            Type::Named(named) => {
                let underlying = self
                    .local_declaration(named)
                    .or(named.underlying.as_deref())?;
                match underlying {
                    Type::Interface(iface) => Some(iface),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Map an interface embedding to `T1 | T2 | ...`.
    ///
    /// A single non-union type is a one-term union. The result is optional
    /// when any term is.
    pub fn union_type(&self, embedded: &Type) -> Result<TsType, MapError> {
        let terms: Vec<&Type> = match embedded {
            Type::Union { terms } => terms.iter().map(|t| &t.ty).collect(),
            other => vec![other],
        };

        let mut values = Vec::with_capacity(terms.len());
        let mut out = TsType::default();
        for term in terms {
            let mapped = self.ts_type(term)?;
            values.push(mapped.value.clone());
            out.optional |= mapped.optional;
            out.absorb(mapped);
        }
        out.value = values.join(" | ");
        Ok(out)
    }
}

fn is_byte(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Basic {
            basic: BasicKind::Byte | BasicKind::Uint8
        }
    )
}

/// Parenthesize union expressions before appending `[]`.
fn wrap_union(value: &str) -> String {
    if value.contains(" | ") {
        format!("({value})")
    } else {
        value.to_string()
    }
}
