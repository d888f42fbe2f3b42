//! Lenient key=value argument parsing.

use std::collections::BTreeMap;

/// Parses a comma-separated argument string into a key→value mapping.
///
/// Each comma-separated token (with surrounding whitespace compacted)
/// must have the exact shape `key=value`; tokens with zero or more than
/// one `=` are dropped silently, never reported. That is how positional
/// arguments and stray text inside declaration calls are ignored.
///
/// Values have every single- and double-quote character removed, with no
/// unescaping, so a literal quote inside a quoted value is lost too.
///
/// When a key repeats, the last value wins.
pub fn parse(arg_text: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    for token in arg_text.split(',') {
        let token = token.trim();
        if token.matches('=').count() != 1 {
            continue;
        }
        // Exactly one '=' present, so split_once cannot fail.
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        let value: String = value.chars().filter(|c| *c != '\'' && *c != '"').collect();
        map.insert(key.to_string(), value);
    }

    map
}
