//! Condition Parsing Module
//!
//! Parses the `$mandatoryIf` directive that hosts embed in a field's
//! description, next to unrelated directives such as `$number`,
//! `$[enum,values]` or `$group`.
//!
//! # Syntax
//!
//! ```text
//! $mandatoryIf                       always mandatory
//! $mandatoryIf(User Type=User)       mandatory when "User Type" is "User"
//! $mandatoryIf(User Type=)           mandatory when "User Type" is empty
//! $mandatoryIf(User Type!=)          mandatory when "User Type" is filled in
//! $mandatoryIf(Distance < 10)        numeric, or lexicographic when not numbers
//! $mandatoryIf(state = a\, b)        mandatory when "state" is "a" or "b"
//! ```
//!
//! ## Supported Operators
//! - `=` (equal to one of the values)
//! - `!=` (filled in and different from every value)
//! - `>` / `>=` / `<` / `<=` (ordering against the first value)
//!
//! ## Escaping
//! Commas inside the directive are written `\,` because the surrounding
//! description grammar separates enum values with commas. The body is
//! unescaped once before the value list is split; a comma that belongs to a
//! single value is therefore written `\\\,`.

mod operator;
mod parser;
mod types;

pub use operator::Operator;
pub use parser::{split_values, DirectiveParser, DEFAULT_DIRECTIVE};
pub use types::Condition;
