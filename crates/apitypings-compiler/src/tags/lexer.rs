//! Lexer for struct tag strings (`json:"name,omitempty" typescript:"-"`).

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagToken {
    #[token(":")]
    Colon,

    /// Double-quoted value, escapes included.
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    Quoted,

    /// Tag key. Any run of non-space characters other than `:` and `"`.
    #[regex(r#"[^ \t\r\n:"]+"#)]
    Key,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Characters the lexer could not match (an unterminated quote).
    Garbage,
}

/// Zero-copy token: kind + byte span into the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TagToken,
    pub span: Range<usize>,
}

/// Tokenize a tag, coalescing consecutive lexer errors into one `Garbage` token.
pub fn lex(tag: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TagToken::lexer(tag);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token {
                        kind: TagToken::Garbage,
                        span: start..lexer.span().start,
                    });
                }
                tokens.push(Token {
                    kind,
                    span: lexer.span(),
                });
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token {
                        kind: TagToken::Garbage,
                        span: start..tag.len(),
                    });
                }
                break;
            }
        }
    }

    tokens
}
