//! Struct tag interpretation.
//!
//! Two steps, kept apart so renderers never see tag syntax:
//! - [`StructTag::parse`] splits a raw tag into `key:"value"` pairs
//! - [`FieldDirective::from_tag`] reduces the `json` and `typescript` keys to
//!   the handful of decisions the struct renderer needs

mod lexer;


use lexer::{TagToken, Token, lex};

/// Errors from malformed struct tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("expected {expected} at offset {offset}")]
    Syntax {
        offset: usize,
        expected: &'static str,
    },

    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscape { offset: usize },
}

/// Parsed value of one tag key: `"name,opt1,opt2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagValue {
    /// Unquoted value before splitting.
    pub raw: String,
    pub name: String,
    pub options: Vec<String>,
}

impl TagValue {
    fn from_raw(raw: String) -> Self {
        let mut parts = raw.split(',');
        let name = parts.next().unwrap_or_default().to_string();
        let options = parts.map(str::to_string).collect();
        Self { raw, name, options }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// All `key:"value"` pairs of a struct tag, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag {
    entries: Vec<(String, TagValue)>,
}

impl StructTag {
    pub fn parse(tag: &str) -> Result<Self, TagError> {
        let tokens: Vec<Token> = lex(tag);
        let mut entries = Vec::new();
        let mut pos = 0;

        loop {
            while tokens
                .get(pos)
                .is_some_and(|t| t.kind == TagToken::Whitespace)
            {
                pos += 1;
            }
            let Some(key) = tokens.get(pos) else {
                break;
            };
            if key.kind != TagToken::Key {
                return Err(syntax(key.span.start, "tag key"));
            }

            // Key, colon and quoted value must be adjacent.
            let colon = tokens.get(pos + 1);
            if colon.map(|t| t.kind) != Some(TagToken::Colon) {
                return Err(syntax(key.span.end, "`:` after tag key"));
            }
            let value = match tokens.get(pos + 2) {
                Some(t) if t.kind == TagToken::Quoted => t,
                Some(t) => return Err(syntax(t.span.start, "quoted tag value")),
                None => return Err(syntax(tag.len(), "quoted tag value")),
            };

            let raw = unquote(&tag[value.span.clone()], value.span.start)?;
            entries.push((tag[key.span.clone()].to_string(), TagValue::from_raw(raw)));
            pos += 3;
        }

        Ok(Self { entries })
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn syntax(offset: usize, expected: &'static str) -> TagError {
    TagError::Syntax { offset, expected }
}

/// Strip the quotes and resolve escapes of a `Quoted` token.
fn unquote(quoted: &str, offset: usize) -> Result<String, TagError> {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next() {
            Some((_, '"')) => '"',
            Some((_, '\\')) => '\\',
            Some((_, '\'')) => '\'',
            Some((_, 'n')) => '\n',
            Some((_, 't')) => '\t',
            Some((_, 'r')) => '\r',
            _ => return Err(TagError::InvalidEscape { offset: offset + 1 + i }),
        };
        out.push(escaped);
    }

    Ok(out)
}

/// What the struct renderer should do with one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDirective {
    /// Drop the field entirely (`json:"-"` or `typescript:"-"`).
    pub skip: bool,
    /// Serialized name, when the `json` key renames the field.
    pub name: Option<String>,
    /// A non-empty `json` key is present. Such embedded fields stay fields.
    pub json_tagged: bool,
    /// `omitempty` / `omitzero`.
    pub omit_empty: bool,
    /// `typescript:"Expr"` replaces the inferred type outright.
    pub override_type: Option<String>,
    /// `typescript:",notnull"`.
    pub not_null: bool,
}

impl FieldDirective {
    pub fn from_tag(tag: &str) -> Result<Self, TagError> {
        let tags = StructTag::parse(tag)?;
        let mut directive = FieldDirective::default();

        if let Some(json) = tags.get("json") {
            // `json:"-,"` names a field "-"; only the bare dash omits it.
            if json.name == "-" && json.options.is_empty() {
                directive.skip = true;
            }
            if !json.name.is_empty() {
                directive.name = Some(json.name.clone());
            }
            directive.json_tagged = !json.raw.is_empty();
            directive.omit_empty = json.has_option("omitempty") || json.has_option("omitzero");
        }

        // Override expressions may contain commas (`Record<string, string>`),
        // so only a trailing `,notnull` is treated as an option.
        if let Some(ts) = tags.get("typescript") {
            let (expr, not_null) = match ts.raw.strip_suffix(",notnull") {
                Some(expr) => (expr, true),
                None => (ts.raw.as_str(), false),
            };
            if expr == "-" {
                directive.skip = true;
            } else if !expr.is_empty() {
                directive.override_type = Some(expr.to_string());
            }
            directive.not_null = not_null;
        }

        Ok(directive)
    }
}
