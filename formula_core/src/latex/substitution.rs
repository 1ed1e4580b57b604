//! # Symbol Substitution
//!
//! Replaces symbolic tokens in a LaTeX template with replacement text.
//!
//! The template is scanned once, left to right. At each position the longest
//! token that matches is replaced and the scan continues after it, so:
//!
//! - a token that is a prefix of another (`c_1` / `c_12`, `N_{Ed}` /
//!   `N_{Ed,max}`) never corrupts the longer one
//! - replacement text is emitted as-is and never re-scanned
//!
//! LaTeX command names (`\frac`, `\cdot`, `\max`) are copied verbatim unless a
//! token itself starts with the command, as `\gamma_{M0}` does. Two more
//! rules keep a token from splitting a symbol:
//!
//! - a token is not matched directly after `_`, so `x` stays in `M_x`
//! - a token ending in a digit is not matched before another digit, so `c_1`
//!   stays in an unmapped `c_12`
//!
//! Adjacent single-letter symbols are both replaced: `bh^2` with `b` and `h`
//! mapped renders as `300.000500.000^2`. Write `b \cdot h^2` or `b h^2` in
//! templates where the product has to stay readable.
//!
//! Tokens missing from the mapping are left in the output unchanged; mapping
//! entries that never occur are ignored.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use formula_core::latex::substitution::replace_symbols;
//!
//! let mut replacements = BTreeMap::new();
//! replacements.insert("c_1", "1.000".to_string());
//! replacements.insert("c_12", "2.000".to_string());
//!
//! assert_eq!(replace_symbols("c_1 + c_12", &replacements), "1.000 + 2.000");
//! ```

use std::collections::BTreeMap;

use crate::latex::format_value;
use crate::units::Unit;

/// A symbol with the numeric value and unit to substitute for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolValue<'a> {
    /// Token as written in the template (e.g. `f_{ck}`)
    pub symbol: &'a str,
    /// Numeric value to insert
    pub value: f64,
    /// Unit appended when rendering with units
    pub unit: Unit,
}

impl<'a> SymbolValue<'a> {
    pub fn new(symbol: &'a str, value: f64, unit: Unit) -> Self {
        Self { symbol, value, unit }
    }

    /// Replacement text: the value with `precision` decimals, optionally unit-suffixed
    pub fn replacement(&self, precision: usize, with_units: bool) -> String {
        let number = format_value(self.value, precision);
        match self.unit.suffix() {
            Some(suffix) if with_units => format!("{}{}", number, suffix),
            _ => number,
        }
    }
}

/// Replace every token of `replacements` found in `template`.
pub fn replace_symbols(template: &str, replacements: &BTreeMap<&str, String>) -> String {
    // Longest first so that a prefix token never wins over the full token
    let mut tokens: Vec<(&str, &str)> = replacements
        .iter()
        .filter(|(token, _)| !token.is_empty())
        .map(|(token, text)| (*token, text.as_str()))
        .collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut output = String::with_capacity(template.len());
    let mut position = 0;

    while position < template.len() {
        let rest = &template[position..];
        let previous = template[..position].chars().next_back();

        let matched = tokens
            .iter()
            .find(|(token, _)| rest.starts_with(token) && is_token_boundary(token, previous, &rest[token.len()..]));

        match matched {
            Some((token, text)) => {
                output.push_str(text);
                position += token.len();
            }
            None => {
                let skipped = command_len(rest).unwrap_or_else(|| rest.chars().next().map_or(1, char::len_utf8));
                output.push_str(&rest[..skipped]);
                position += skipped;
            }
        }
    }

    output
}

/// Substitute numeric values into `template`.
///
/// Each value is rendered with `precision` decimals. With `with_units` set,
/// values of non-dimensionless symbols get a space and their unit appended.
pub fn substitute_values(template: &str, values: &[SymbolValue<'_>], precision: usize, with_units: bool) -> String {
    let replacements: BTreeMap<&str, String> = values
        .iter()
        .map(|value| (value.symbol, value.replacement(precision, with_units)))
        .collect();
    replace_symbols(template, &replacements)
}

fn is_token_boundary(token: &str, previous: Option<char>, following: &str) -> bool {
    // subscript of another symbol
    if previous == Some('_') {
        return false;
    }

    let ends_with_digit = token.chars().next_back().is_some_and(|c| c.is_ascii_digit());
    if ends_with_digit && following.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    true
}

/// Byte length of the LaTeX command at the start of `text`: `\` plus its
/// letters, or `\` plus one symbol (`\,`, `\\`). `None` if `text` is not a command.
fn command_len(text: &str) -> Option<usize> {
    let name = text.strip_prefix('\\')?;
    let letters: usize = name
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .map(char::len_utf8)
        .sum();
    let len = if letters > 0 {
        letters
    } else {
        name.chars().next().map_or(0, char::len_utf8)
    };
    Some(1 + len)
}
