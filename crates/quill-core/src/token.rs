//! Token grammar.
//!
//! A token is `{name}` or `{name:default}`. Names use `[A-Za-z0-9_-]`; a default
//! runs up to the first unescaped `}` and may itself contain `\{` or `\}`.
//! A backslash before a brace makes it literal text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Pattern for matching tokens in a definition.
/// Group 1 is a leading backslash (escaped, not a token), group 2 the name,
/// group 3 the optional default.
const TOKEN_PATTERN: &str = r"(\\)?\{([A-Za-z0-9_-]+)(?::((?:\\[{}]|[^}])*))?\}";

/// Pattern for a backslash-escaped reserved brace.
const ESCAPE_PATTERN: &str = r"\\([{}])";

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
static ESCAPE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("Invalid token pattern regex"))
}

fn get_escape_regex() -> &'static Regex {
    ESCAPE_REGEX.get_or_init(|| Regex::new(ESCAPE_PATTERN).expect("Invalid escape pattern regex"))
}

/// A parsed token occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token name.
    pub name: String,

    /// Raw local default. `Some("")` for `{name:}`, `None` for `{name}`.
    pub default: Option<String>,

    /// Start position in the definition.
    pub start: usize,

    /// End position in the definition.
    pub end: usize,
}

/// Iterate over the tokens of `definition` from left to right.
pub fn scan(definition: &str) -> impl Iterator<Item = Token> + '_ {
    get_token_regex()
        .captures_iter(definition)
        .filter(|cap| cap.get(1).is_none())
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            Some(Token {
                name: cap.get(2)?.as_str().to_string(),
                default: cap.get(3).map(|m| m.as_str().to_string()),
                start: whole.start(),
                end: whole.end(),
            })
        })
}

/// Replace every `\{` and `\}` with the bare brace.
pub fn unescape(text: &str) -> Cow<'_, str> {
    get_escape_regex().replace_all(text, "$1")
}
