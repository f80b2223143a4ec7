//! Dataset identifiers used as table columns.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Words that cannot be used as bare column identifiers.
const RESERVED: &[&str] = &[
    "if", "else", "repeat", "while", "function", "for", "next", "break", "in", "TRUE", "FALSE",
    "NULL", "Inf", "NaN", "NA", "NA_integer_", "NA_real_", "NA_character_", "NA_complex_",
];

fn invalid_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._]").expect("static pattern"))
}

fn needs_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:$|[^A-Za-z.]|\.[0-9])").expect("static pattern"))
}

/// A dataset name that is a valid column identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetName(String);

impl DatasetName {
    /// Synthesized name for the dataset at `index` (0-based): `Phys1`, `Phys2`, ...
    pub fn synthesized(index: usize) -> Self {
        Self(format!("Phys{}", index + 1))
    }

    /// Turn an arbitrary label into a valid identifier.
    ///
    /// Labels that are empty, or do not start with a letter or a dot not
    /// followed by a digit, get an `X` prefix. Characters outside
    /// `[A-Za-z0-9._]` then become `.`, and reserved words get a trailing `.`.
    pub fn sanitize(raw: &str) -> Self {
        let mut name = invalid_chars().replace_all(raw, ".").into_owned();
        if needs_prefix().is_match(raw) {
            name.insert(0, 'X');
        }
        if RESERVED.contains(&name.as_str()) {
            name.push('.');
        }
        Self(name)
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DatasetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DatasetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
