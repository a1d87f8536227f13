//! # Error Taxonomy
//!
//! * [`HostError`]: the host failed the grammar. Recovered by re-prompting.
//! * [`TraceError`]: the trace utility could not run or exited abnormally.
//!   Reported, then treated as an empty hop list.
//! * [`LookupError`]: one hop could not be located. Fatal for the run.
//! * [`PipelineError`]: what the orchestrator hands back to its caller.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("invalid domain name: {0:?}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Status {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// The geolocation service could not place an address.
///
/// Bad data, quota exhaustion and transport failures are indistinguishable
/// from the outside, so there is a single kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("could not locate {ip}: {reason}")]
pub struct LookupError {
    pub ip: String,
    pub reason: String,
}

impl LookupError {
    pub fn new(ip: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            ip: ip.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no usable hops in the trace to {host}")]
    EmptyPath { host: String },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("failed to render the map: {0:#}")]
    Render(anyhow::Error),
}
