//! # Trace Target Model
//!
//! A [`Host`] is the user supplied name handed to the trace utility.
//!
//! Validation is a fixed, permissive grammar:
//! `^[A-Za-z0-9.-]+\.[A-Za-z]{2,}$`. It accepts names such as `a..pl` and
//! rejects internationalized names.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::HostError;

const HOST_PATTERN: &str = r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static HOST_REGEX: OnceLock<Regex> = OnceLock::new();

fn host_regex() -> &'static Regex {
    HOST_REGEX.get_or_init(|| Regex::new(HOST_PATTERN).expect("valid host pattern"))
}

/// Returns whether `host` matches the hostname grammar.
pub fn is_valid(host: &str) -> bool {
    host_regex().is_match(host)
}

/// A validated trace target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(HostError::Invalid(s.to_string()))
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
