//! # Hop Extraction
//!
//! Turns trace text into an ordered list of hop addresses. Every delimited
//! dotted-quad is returned in the order it appears; lines without one
//! (timeouts, `* * *`) contribute nothing. Nothing is sorted or deduplicated.

use std::sync::OnceLock;

use geotrace_common::config::AddressDelimiters;
use geotrace_common::error::TraceError;
use geotrace_common::hop::HopAddress;
use geotrace_common::host::Host;
use regex::Regex;
use tracing::debug;

use crate::trace::TraceRunner;

const BRACKETED_IP: &str = r"\[(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\]";
const PARENTHESIZED_IP: &str = r"\((\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\)";

static BRACKETED: OnceLock<Regex> = OnceLock::new();
static PARENTHESIZED: OnceLock<Regex> = OnceLock::new();

fn pattern(delimiters: AddressDelimiters) -> &'static Regex {
    match delimiters {
        AddressDelimiters::Brackets => BRACKETED
            .get_or_init(|| Regex::new(BRACKETED_IP).expect("valid bracketed IP pattern")),
        AddressDelimiters::Parens => PARENTHESIZED
            .get_or_init(|| Regex::new(PARENTHESIZED_IP).expect("valid parenthesized IP pattern")),
    }
}

/// Returns every delimited address in `output`, first to last.
pub fn extract_addresses(output: &str, delimiters: AddressDelimiters) -> Vec<HopAddress> {
    pattern(delimiters)
        .captures_iter(output)
        .map(|caps| HopAddress::new(&caps[1]))
        .collect()
}

pub struct HopExtractor {
    runner: Box<dyn TraceRunner>,
    delimiters: AddressDelimiters,
}

impl HopExtractor {
    pub fn new(runner: Box<dyn TraceRunner>, delimiters: AddressDelimiters) -> Self {
        Self { runner, delimiters }
    }

    /// Traces `host` and extracts its hops.
    ///
    /// A failed trace is returned as an error; callers that continue anyway
    /// must treat it as "no usable path".
    pub async fn extract_hops(&self, host: &Host) -> Result<Vec<HopAddress>, TraceError> {
        let output: String = self.runner.run(host).await?;
        let hops: Vec<HopAddress> = extract_addresses(&output, self.delimiters);
        debug!(%host, count = hops.len(), "extracted hop addresses");
        Ok(hops)
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
