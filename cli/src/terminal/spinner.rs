use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use crate::terminal::logging::GeotraceFormatter;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

static PROGRESS: OnceLock<MultiProgress> = OnceLock::new();

fn progress() -> &'static MultiProgress {
    PROGRESS.get_or_init(MultiProgress::new)
}

pub struct SpinnerHandle {
    spinner: ProgressBar,
}

impl SpinnerHandle {
    pub fn start(message: String) -> Self {
        let style: ProgressStyle = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);

        let spinner: ProgressBar = progress().add(ProgressBar::new_spinner());
        spinner.set_style(style);
        spinner.set_message(message);
        spinner.enable_steady_tick(TICK_INTERVAL);

        Self { spinner }
    }

    pub fn set_message(&self, message: String) {
        self.spinner.set_message(message);
    }

    pub fn finish_and_clear(self) {
        self.spinner.finish_and_clear();
        progress().remove(&self.spinner);
    }
}

/// Writes log output above any running spinner.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        progress().suspend(|| std::io::stdout().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}

pub fn init_logging() {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(GeotraceFormatter)
        .with_writer(|| SpinnerWriter)
        .init();
}
