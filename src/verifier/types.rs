use std::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::smtp_verify::ProbeResult;

/// Whether mail to the address would plausibly arrive.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Reachable {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Reachable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Reachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address split into its parts.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syntax {
    pub username: String,
    pub domain: String,
    pub valid: bool,
}

impl Syntax {
    /// Split on the last `@`. The domain is lowercased; both parts must be
    /// non-empty and free of whitespace.
    pub fn parse(email: &str) -> Self {
        let Some((username, domain)) = email.trim().rsplit_once('@') else {
            return Self::default();
        };
        let valid = !username.is_empty()
            && !domain.is_empty()
            && !email.trim().chars().any(char::is_whitespace);
        if !valid {
            return Self::default();
        }
        Self {
            username: username.to_string(),
            domain: domain.to_lowercase(),
            valid,
        }
    }
}

/// Outcome of [`Verifier::verify`](super::Verifier::verify).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    pub email: String,
    pub reachable: Reachable,
    pub syntax: Syntax,
    pub smtp: Option<ProbeResult>,
    pub disposable: bool,
    pub role_account: bool,
    pub free: bool,
    pub has_mx_records: bool,
}
