//! Selector parsing.
//!
//! Permissive by design: unparseable fragments are skipped rather than
//! reported, matching how browsers drop invalid selector parts.

use crate::{CompoundSelector, SelectorList, SimpleSelector};

/// Tokenizer over a selector string.
struct SelectorTokenizer {
    input_bytes: Vec<u8>,
    index: usize,
}

impl SelectorTokenizer {
    fn new(input: &str) -> Self {
        Self {
            input_bytes: input.as_bytes().to_vec(),
            index: 0,
        }
    }

    /// Return the next simple selector, if any. Whitespace between simple
    /// selectors is skipped; this surface has no combinators.
    fn next(&mut self) -> Option<SimpleSelector> {
        self.skip_spaces();
        let &current = self.input_bytes.get(self.index)?;
        match current {
            b'*' => {
                self.index = self.index.saturating_add(1);
                Some(SimpleSelector::Universal)
            }
            b'.' => {
                self.index = self.index.saturating_add(1);
                Some(SimpleSelector::Class(self.consume_ident()))
            }
            b'#' => {
                self.index = self.index.saturating_add(1);
                Some(SimpleSelector::IdSelector(self.consume_ident()))
            }
            b'[' => Some(self.consume_attr()),
            _ => Some(SimpleSelector::Type(self.consume_ident())),
        }
    }

    /// Consume an identifier of ASCII alphanumerics, '-' and '_', lowercased.
    fn consume_ident(&mut self) -> String {
        let start = self.index;
        while let Some(&byte) = self.input_bytes.get(self.index) {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                self.index = self.index.saturating_add(1);
            } else {
                break;
            }
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).to_ascii_lowercase()
    }

    /// Parse an attribute selector, supporting `[name]` and `[name=value]`
    /// (quoted or unquoted). The value is preserved case-sensitively.
    fn consume_attr(&mut self) -> SimpleSelector {
        // skip '['
        self.index = self.index.saturating_add(1);
        self.skip_spaces();
        let name = self.consume_ident();
        self.skip_spaces();

        let has_value = self
            .input_bytes
            .get(self.index)
            .is_some_and(|&byte| byte == b'=');
        if !has_value {
            self.consume_closing_bracket();
            return SimpleSelector::AttrPresent(name);
        }

        // skip '='
        self.index = self.index.saturating_add(1);
        self.skip_spaces();
        let value = if self
            .input_bytes
            .get(self.index)
            .is_some_and(|&byte| byte == b'"' || byte == b'\'')
        {
            let quote = *self.input_bytes.get(self.index).unwrap_or(&b'"');
            self.index = self.index.saturating_add(1);
            self.consume_quoted_value(quote)
        } else {
            self.consume_unquoted_value()
        };
        self.consume_closing_bracket();
        SimpleSelector::AttrEquals { name, value }
    }

    /// Consume an unquoted attribute value until whitespace or `]`.
    fn consume_unquoted_value(&mut self) -> String {
        let start = self.index;
        while let Some(&byte) = self.input_bytes.get(self.index) {
            if byte.is_ascii_whitespace() || byte == b']' {
                break;
            }
            self.index = self.index.saturating_add(1);
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).to_string()
    }

    /// Consume a quoted attribute value until the matching quote byte.
    fn consume_quoted_value(&mut self, quote: u8) -> String {
        let start = self.index;
        while matches!(self.input_bytes.get(self.index), Some(&byte) if byte != quote) {
            self.index = self.index.saturating_add(1);
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        let out = String::from_utf8_lossy(slice).to_string();
        if self.input_bytes.get(self.index).is_some() {
            self.index = self.index.saturating_add(1);
        }
        out
    }

    fn consume_closing_bracket(&mut self) {
        self.skip_spaces();
        if self
            .input_bytes
            .get(self.index)
            .is_some_and(|&byte| byte == b']')
        {
            self.index = self.index.saturating_add(1);
        }
    }

    fn skip_spaces(&mut self) {
        while matches!(self.input_bytes.get(self.index), Some(byte) if byte.is_ascii_whitespace())
        {
            self.index = self.index.saturating_add(1);
        }
    }
}

/// Parse a comma-separated selector list.
///
/// Empty parts and parts that yield no simple selectors are dropped; the
/// result may be an empty list.
pub fn parse_selector_list(input: &str) -> SelectorList {
    let mut list = SelectorList::default();
    for part in input.split(',') {
        let compound = parse_compound_selector(part.trim());
        if !compound.simples.is_empty() {
            list.selectors.push(compound);
        }
    }
    list
}

/// Parse one compound selector (very permissive, minimal error handling).
pub fn parse_compound_selector(input: &str) -> CompoundSelector {
    let mut tokens = SelectorTokenizer::new(input);
    let mut compound = CompoundSelector::default();
    while let Some(simple) = tokens.next() {
        // An empty type ident means the tokenizer could not make progress
        // on an unknown byte; step past it instead of looping.
        if matches!(&simple, SimpleSelector::Type(name) if name.is_empty()) {
            tokens.index = tokens.index.saturating_add(1);
            continue;
        }
        compound.simples.push(simple);
    }
    compound
}
