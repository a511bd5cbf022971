//! Package scope as produced by the loader.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::Type;

/// One type-checked source package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Import path; identifies declarations that belong to this package.
    pub path: String,
    /// Short package name.
    pub name: String,
    /// Top-level scope, in the order the loader reported it.
    #[serde(default)]
    pub objects: Vec<Object>,
    /// Raw text of every comment in the package, markers included.
    #[serde(default)]
    pub comments: Vec<String>,
}

/// Named top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    pub pos: Position,
    #[serde(flatten)]
    pub kind: ObjectKind,
}

/// Source position of a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub file: String,
    #[serde(default)]
    pub line: u32,
}

/// What a scope entry declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum ObjectKind {
    /// `type Name <underlying>`.
    TypeName { underlying: Type },
    /// `const Name <type> = <value>`.
    Const {
        #[serde(rename = "type")]
        ty: Type,
        value: ConstValue,
    },
    /// Package-level variable.
    Var {
        #[serde(rename = "type")]
        ty: Type,
    },
    /// Package-level function.
    Func,
}

/// Evaluated constant value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstValue {
    Bool(bool),
    Int(i64),
    /// Unsigned values above `i64::MAX`.
    Uint(u64),
    Float(f64),
    String(String),
}

impl ConstValue {
    /// Literal type spelling (`"red"`, `42`, `true`).
    pub fn literal(&self) -> String {
        match self {
            ConstValue::Bool(b) => b.to_string(),
            ConstValue::Int(i) => i.to_string(),
            ConstValue::Uint(u) => u.to_string(),
            ConstValue::Float(x) => x.to_string(),
            // JSON string escaping is a valid literal spelling.
            ConstValue::String(s) => {
                serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
            }
        }
    }
}

impl Package {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            objects: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Add a type declaration.
    pub fn type_decl(mut self, name: &str, file: &str, underlying: Type) -> Self {
        self.objects.push(Object {
            name: name.to_string(),
            pos: Position::new(file, 0),
            kind: ObjectKind::TypeName { underlying },
        });
        self
    }

    /// Add a constant typed with a named type of this package.
    pub fn const_decl(mut self, name: &str, file: &str, type_name: &str, value: ConstValue) -> Self {
        let ty = Type::named(self.path.clone(), type_name);
        self.objects.push(Object {
            name: name.to_string(),
            pos: Position::new(file, 0),
            kind: ObjectKind::Const { ty, value },
        });
        self
    }

    pub fn object(mut self, object: Object) -> Self {
        self.objects.push(object);
        self
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }

    /// Index the scope by identifier. Later duplicates win, matching a map-backed scope.
    pub fn scope(&self) -> IndexMap<&str, &Object> {
        self.objects.iter().map(|o| (o.name.as_str(), o)).collect()
    }

    /// Whether `path` names this package.
    pub fn is_local(&self, path: Option<&str>) -> bool {
        path == Some(self.path.as_str())
    }
}

impl Position {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}
