//! Wildcard search patterns.
//!
//! `*` matches any run of characters (including none), `?` matches exactly one
//! character. Everything else is literal and the pattern must match the whole
//! value.

use crate::error::Result;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
}

impl SearchPattern {
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let mut source = String::with_capacity(pattern.len() + 8);
        source.push('^');
        let mut literal = [0u8; 4];
        for ch in pattern.chars() {
            match ch {
                '*' => source.push_str(".*"),
                '?' => source.push('.'),
                _ => source.push_str(&regex::escape(ch.encode_utf8(&mut literal))),
            }
        }
        source.push('$');

        let regex = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self { regex })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}
