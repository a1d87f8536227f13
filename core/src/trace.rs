//! Runs the external path-trace utility.

use async_trait::async_trait;
use geotrace_common::error::TraceError;
use geotrace_common::host::Host;
use tokio::process::Command;
use tracing::debug;

/// Produces raw trace text for a host.
#[async_trait]
pub trait TraceRunner: Send + Sync {
    async fn run(&self, host: &Host) -> Result<String, TraceError>;
}

/// Spawns `program <host>` and returns its stdout.
///
/// Blocks until the program exits; no timeout is applied.
pub struct CommandTraceRunner {
    program: String,
}

impl CommandTraceRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl TraceRunner for CommandTraceRunner {
    async fn run(&self, host: &Host) -> Result<String, TraceError> {
        debug!(program = %self.program, %host, "spawning trace");

        let output = Command::new(&self.program)
            .arg(host.as_str())
            .output()
            .await
            .map_err(|source| TraceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TraceError::Status {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
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
