//! Directive parser
//!
//! Extracts a `$mandatoryIf` directive from a field description such as:
//! - `$mandatoryIf`
//! - `$[Robot,User] $mandatoryIf(User Type=User)`
//! - `$mandatoryIf(Distance < 10) $number`
//! - `$mandatoryIf(state != \,mau 1\, mau 2)`
//!
//! Parsing never fails. A directive that cannot be understood degenerates to
//! an unconditional one.

use super::operator::Operator;
use super::types::Condition;

/// Directive keyword used when none is configured
pub const DEFAULT_DIRECTIVE: &str = "mandatoryIf";

const SIGIL: char = '$';
const ESCAPE: char = '\\';

/// Parser for the `$mandatoryIf(...)` directive embedded in field descriptions
#[derive(Debug, Clone)]
pub struct DirectiveParser {
    marker: String,
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self::with_keyword(DEFAULT_DIRECTIVE)
    }
}

impl DirectiveParser {
    /// Create a parser for the default `$mandatoryIf` keyword
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser recognising `$<keyword>` instead of `$mandatoryIf`
    pub fn with_keyword(keyword: &str) -> Self {
        Self {
            marker: format!("{}{}", SIGIL, keyword),
        }
    }

    /// The full marker, sigil included
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns true if the description carries the directive
    pub fn contains_directive(&self, description: &str) -> bool {
        self.locate(description).is_some()
    }

    /// Parse the directive out of a field description
    ///
    /// Returns `None` when the description has no directive.
    pub fn parse(&self, description: &str) -> Option<Condition> {
        let end = self.locate(description)?;
        let rest = &description[end..];

        // Whitespace between the marker and its parenthesis group is tolerated
        let Some(group) = rest.trim_start().strip_prefix('(') else {
            return Some(Condition::unconditional());
        };

        match extract_group(group) {
            Some(body) => Some(parse_expression(&unescape_body(body))),
            None => {
                log::warn!(
                    "Unbalanced parentheses in directive '{}', treating field as always mandatory",
                    description
                );
                Some(Condition::unconditional())
            }
        }
    }

    /// Byte offset right after the first standalone marker
    fn locate(&self, description: &str) -> Option<usize> {
        let mut from = 0;
        while let Some(pos) = description[from..].find(&self.marker) {
            let end = from + pos + self.marker.len();
            match description[end..].chars().next() {
                // `$mandatoryIfSomething` is a different directive
                Some(c) if c.is_alphanumeric() || c == '_' => from = end,
                _ => return Some(end),
            }
        }
        None
    }
}

/// Content of a parenthesis group whose opening `(` was already consumed
fn extract_group(text: &str) -> Option<&str> {
    let mut depth = 1usize;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            ESCAPE => escaped = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..i]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Remove one level of description escaping from the directive body
///
/// `\,` `\(` `\)` and `\\` lose their backslash. Any other backslash is kept.
fn unescape_body(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(&next) = chars.peek() {
                if matches!(next, ',' | '(' | ')' | ESCAPE) {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}

/// Parse `Name OP Values` into a condition
fn parse_expression(expression: &str) -> Condition {
    let expression = expression.trim();

    let Some((pos, operator)) = find_operator(expression) else {
        if !expression.is_empty() {
            log::warn!(
                "No operator found in condition '{}', treating field as always mandatory",
                expression
            );
        }
        return Condition::unconditional();
    };

    let target = expression[..pos].trim();
    if target.is_empty() {
        log::warn!(
            "Empty target field in condition '{}', treating field as always mandatory",
            expression
        );
        return Condition::unconditional();
    }

    let raw_values = expression[pos + operator.symbol().len()..].trim();
    Condition::new(target, operator, split_values(raw_values))
}

/// Leftmost operator in the expression, two-character operators winning at each position
fn find_operator(expression: &str) -> Option<(usize, Operator)> {
    let bytes = expression.as_bytes();

    for (i, c) in expression.char_indices() {
        let next_is_eq = bytes.get(i + 1) == Some(&b'=');
        let operator = match c {
            '!' if next_is_eq => Operator::Ne,
            '<' if next_is_eq => Operator::Le,
            '>' if next_is_eq => Operator::Ge,
            '=' => Operator::Eq,
            '<' => Operator::Lt,
            '>' => Operator::Gt,
            _ => continue,
        };
        return Some((i, operator));
    }

    None
}

/// Split a value list on unescaped commas
///
/// Each element has `\,` turned into `,` and is trimmed. Blank input yields
/// an empty list.
pub fn split_values(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let mut values = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if chars.peek() == Some(&',') => {
                current.push(',');
                chars.next();
            }
            ',' => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    values.push(current.trim().to_string());

    values
}
