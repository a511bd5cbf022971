//! Declaration block rendering.

use apitypings_core::utils::base_name;
use apitypings_core::{ConstValue, Field, Object, Type};
use indexmap::IndexMap;
use tracing::warn;

use super::{GenericBinding, Generator, MapError, TsType};
use crate::tags::FieldDirective;
use crate::{Error, Result};

const INDENT: &str = "  ";

/// Generic parameters of one declaration, in first-use order.
#[derive(Debug, Default)]
pub(super) struct GenericParams {
    bound: IndexMap<String, String>,
}

impl GenericParams {
    /// Bind every symbol; a symbol already bound to another constraint is an error.
    pub(super) fn bind_all(&mut self, object: &Object, bindings: Vec<GenericBinding>) -> Result<()> {
        for binding in bindings {
            match self.bound.get(&binding.symbol) {
                Some(first) if *first != binding.constraint => {
                    return Err(Error::ConflictingGeneric {
                        decl: object.name.clone(),
                        file: object.pos.file.clone(),
                        symbol: binding.symbol,
                        first: first.clone(),
                        second: binding.constraint,
                    });
                }
                Some(_) => {}
                None => {
                    self.bound.insert(binding.symbol, binding.constraint);
                }
            }
        }
        Ok(())
    }

    /// `<T extends A, U extends B>`, or nothing.
    pub(super) fn render(&self) -> String {
        if self.bound.is_empty() {
            return String::new();
        }
        let params = self
            .bound
            .iter()
            .map(|(symbol, constraint)| format!("{symbol} extends {constraint}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("<{params}>")
    }
}

impl Generator<'_> {
    /// `export interface Name<..> extends Base { .. }`.
    pub(super) fn render_struct(&self, object: &Object, fields: &[Field]) -> Result<String> {
        let decl = object.name.as_str();
        let mut bases = Vec::new();
        let mut params = GenericParams::default();
        let mut lines = Vec::new();

        for field in fields {
            let directive = FieldDirective::from_tag(&field.tag).map_err(|source| Error::Tag {
                decl: decl.to_string(),
                file: object.pos.file.clone(),
                field: field.name.clone(),
                source,
            })?;
            if directive.skip {
                continue;
            }
            let field_error = |source| Error::Field {
                decl: decl.to_string(),
                file: object.pos.file.clone(),
                field: field.name.clone(),
                source,
            };

            if field.embedded && !directive.json_tagged {
                match self.embedded_base(field) {
                    Ok(Some(base)) => {
                        bases.push(base);
                        continue;
                    }
                    Ok(None) => {}
                    Err(source) => return Err(field_error(source)),
                }
            }

            let mut ts = match &directive.override_type {
                Some(expr) => TsType::new(expr.clone()),
                None => self.ts_type(&field.ty).map_err(field_error)?,
            };
            params.bind_all(object, std::mem::take(&mut ts.generics))?;

            let optional = !directive.not_null && (directive.omit_empty || ts.optional);
            let name = directive.name.as_deref().unwrap_or(&field.name);
            for annotation in &ts.annotations {
                lines.push(format!("{INDENT}// {annotation}"));
            }
            lines.push(format!(
                "{INDENT}readonly {}{}: {}",
                property_name(name),
                if optional { "?" } else { "" },
                ts.value
            ));
        }

        let mut out = self.source_line(object);
        out.push_str(&format!("export interface {decl}{}", params.render()));
        if !bases.is_empty() {
            out.push_str(&format!(" extends {}", bases.join(", ")));
        }
        out.push_str(" {\n");
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("}\n");
        Ok(out)
    }

    /// Name of the local record an untagged embedded field extends.
    ///
    /// `None` keeps the field as a regular field.
    fn embedded_base(&self, field: &Field) -> std::result::Result<Option<String>, MapError> {
        if !self.package.is_local(field.package.as_deref()) {
            return Ok(None);
        }
        let target = match &field.ty {
            Type::Pointer { elem } => elem.as_ref(),
            other => other,
        };
        let named = match target {
            Type::Named(named) => named,
            Type::Struct { .. } => {
                return Err(MapError::AnonymousEmbedded {
                    ty: target.to_string(),
                });
            }
            _ => return Ok(None),
        };
        match self.local_declaration(named) {
            Some(Type::Struct { .. }) => {
                if self.ignored.contains(&named.name) {
                    warn!(base = %named.name, "extending a record that is not generated");
                }
                Ok(Some(named.name.clone()))
            }
            _ => Ok(None),
        }
    }

    /// `export type Name = "a" | "b"`, members sorted by literal text.
    ///
    /// A base without constants aliases its primitive's mapping.
    pub(super) fn render_enum(
        &self,
        object: &Object,
        base: &Type,
        members: &[&ConstValue],
    ) -> Result<String> {
        if members.is_empty() {
            let ts = self
                .ts_type(base)
                .map_err(|source| declaration_error(object, source))?;
            return self.render_type_decl(object, "", &ts);
        }

        let mut literals: Vec<String> = members.iter().map(|value| value.literal()).collect();
        literals.sort();
        literals.dedup();

        let mut out = self.source_line(object);
        out.push_str(&format!(
            "export type {} = {}\n",
            object.name,
            literals.join(" | ")
        ));
        Ok(out)
    }

    /// Map or sequence declaration: `export type Name = Record<K, V>`.
    pub(super) fn render_alias(&self, object: &Object, underlying: &Type) -> Result<String> {
        let ts = self
            .ts_type(underlying)
            .map_err(|source| declaration_error(object, source))?;
        self.render_type_decl(object, "", &ts)
    }

    /// Constraint interface: `export type Name = T1 | T2`.
    pub(super) fn render_union(&self, object: &Object, embedded: &Type) -> Result<String> {
        let ts = self
            .union_type(embedded)
            .map_err(|source| declaration_error(object, source))?;
        let marker = if ts.optional { "?" } else { "" };
        self.render_type_decl(object, marker, &ts)
    }

    fn render_type_decl(&self, object: &Object, marker: &str, ts: &TsType) -> Result<String> {
        let mut params = GenericParams::default();
        params.bind_all(object, ts.generics.clone())?;

        let mut out = self.source_line(object);
        for annotation in &ts.annotations {
            out.push_str(&format!("// {annotation}\n"));
        }
        out.push_str(&format!(
            "export type {}{}{marker} = {}\n",
            object.name,
            params.render(),
            ts.value
        ));
        Ok(out)
    }

    /// `// From <prefix>/<file>`.
    pub(super) fn source_line(&self, object: &Object) -> String {
        let prefix = self
            .config
            .source_prefix
            .as_deref()
            .unwrap_or(&self.package.name)
            .trim_end_matches('/');
        let file = base_name(&object.pos.file);
        if prefix.is_empty() {
            format!("// From {file}\n")
        } else {
            format!("// From {prefix}/{file}\n")
        }
    }
}

fn declaration_error(object: &Object, source: MapError) -> Error {
    Error::Declaration {
        decl: object.name.clone(),
        file: object.pos.file.clone(),
        source,
    }
}

/// Quote serialized names that are not valid identifiers (`"created-at"`).
fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if valid {
        name.to_string()
    } else {
        format!("{name:?}")
    }
}
