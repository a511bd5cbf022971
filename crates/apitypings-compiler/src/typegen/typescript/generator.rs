//! Generator state and the declaration classifier pass.

use std::collections::HashMap;

use apitypings_core::utils::is_exported;
use apitypings_core::{ConstValue, NamedType, Object, ObjectKind, Package, Type};
use indexmap::IndexMap;
use tracing::{debug, info};

use super::{Config, TypeScriptTypes};
use crate::ignore::IgnoreSet;
use crate::{Error, Result};

/// TypeScript generator for one package.
pub struct Generator<'a> {
    pub(super) package: &'a Package,
    pub(super) config: Config,
    /// Identifier -> declaration
    pub(super) scope: IndexMap<&'a str, &'a Object>,
    /// Declarations excluded from every bucket
    pub(super) ignored: IgnoreSet,
}

/// Enum bases and their constants, collected across the whole pass.
///
/// Constants may precede their base type in scope order, so nothing is
/// rendered until the pass is over.
#[derive(Default)]
struct EnumAccumulator<'a> {
    bases: IndexMap<&'a str, (&'a Object, &'a Type)>,
    members: HashMap<&'a str, Vec<&'a ConstValue>>,
}

impl<'a> Generator<'a> {
    pub fn new(package: &'a Package, config: Config) -> Self {
        Self {
            package,
            config,
            scope: package.scope(),
            ignored: IgnoreSet::scan(&package.comments),
        }
    }

    pub(crate) fn ignored(&self) -> &IgnoreSet {
        &self.ignored
    }

    /// Classify every declaration and render all buckets.
    pub fn generate(&self) -> Result<TypeScriptTypes> {
        let mut records = IndexMap::new();
        let mut generics = IndexMap::new();
        let mut enums = EnumAccumulator::default();

        let package = self.package;
        for object in &package.objects {
            if self.ignored.contains(&object.name) {
                debug!(name = %object.name, "ignored by directive");
                continue;
            }

            match &object.kind {
                ObjectKind::TypeName { underlying } => {
                    if !is_exported(&object.name) {
                        debug!(name = %object.name, "skipping unexported type");
                        continue;
                    }
                    self.classify(object, underlying, &mut records, &mut generics, &mut enums)?;
                }
                ObjectKind::Const { ty, value } => {
                    if let Type::Named(named) = ty {
                        if package.is_local(named.package.as_deref()) {
                            enums.members.entry(named.name.as_str()).or_default().push(value);
                        }
                    }
                }
                ObjectKind::Var { .. } | ObjectKind::Func => {}
            }
        }

        let mut rendered_enums = IndexMap::new();
        for (name, (object, base)) in enums.bases {
            let members = enums.members.get(name).map(Vec::as_slice).unwrap_or_default();
            rendered_enums.insert(name.to_string(), self.render_enum(object, base, members)?);
        }

        let types = TypeScriptTypes {
            banner: self.config.banner.clone(),
            records,
            enums: rendered_enums,
            generics,
        };
        info!(
            records = types.records.len(),
            enums = types.enums.len(),
            generics = types.generics.len(),
            "generated declarations"
        );
        Ok(types)
    }

    fn classify(
        &self,
        object: &'a Object,
        underlying: &'a Type,
        records: &mut IndexMap<String, String>,
        generics: &mut IndexMap<String, String>,
        enums: &mut EnumAccumulator<'a>,
    ) -> Result<()> {
        let name = object.name.as_str();
        match underlying {
            Type::Struct { fields } => {
                debug!(name, "record");
                records.insert(name.to_string(), self.render_struct(object, fields)?);
            }
            Type::Basic { .. } => {
                debug!(name, "enum base");
                enums.bases.insert(name, (object, underlying));
            }
            Type::Map { .. } | Type::Slice { .. } | Type::Array { .. } => {
                debug!(name, shape = underlying.shape(), "alias");
                records.insert(name.to_string(), self.render_alias(object, underlying)?);
            }
            Type::Interface(iface) => {
                if iface.embedded.len() == 1 {
                    debug!(name, "generic union");
                    generics.insert(name.to_string(), self.render_union(object, &iface.embedded[0])?);
                } else {
                    debug!(name, "skipping interface without a single embedded type set");
                }
            }
            Type::Signature => {
                debug!(name, "skipping function type");
            }
            Type::Named(_)
            | Type::Pointer { .. }
            | Type::TypeParam(_)
            | Type::Union { .. }
            | Type::Chan { .. } => {
                return Err(Error::UnsupportedDeclaration {
                    name: name.to_string(),
                    file: object.pos.file.clone(),
                    shape: underlying.shape(),
                    ty: underlying.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Underlying type of a type declaration of this package.
    pub(super) fn local_declaration(&self, named: &NamedType) -> Option<&'a Type> {
        if !self.package.is_local(named.package.as_deref()) {
            return None;
        }
        let object: &'a Object = self.scope.get(named.name.as_str()).copied()?;
        match &object.kind {
            ObjectKind::TypeName { underlying } => Some(underlying),
            _ => None,
        }
    }
}
