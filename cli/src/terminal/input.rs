use std::io::{BufRead, Write};

use geotrace_common::host::Host;
use tracing::warn;

const PROMPT: &str = "Enter domain: ";

/// Asks for a host until one passes validation.
///
/// The line is checked as typed, minus its line ending. Running out of input
/// is an error.
pub fn prompt_host<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Host> {
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("no domain name given");
        }

        match line.trim_end_matches(['\r', '\n']).parse::<Host>() {
            Ok(host) => return Ok(host),
            Err(_) => warn!("Invalid domain name. Try again."),
        }
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
