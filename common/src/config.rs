use std::path::PathBuf;
use std::str::FromStr;

#[cfg(windows)]
pub const DEFAULT_TRACE_PROGRAM: &str = "tracert";
#[cfg(not(windows))]
pub const DEFAULT_TRACE_PROGRAM: &str = "traceroute";

pub const DEFAULT_GEO_ENDPOINT: &str = "http://ip-api.com/json";
pub const DEFAULT_OUTPUT: &str = "mapa.png";
pub const DEFAULT_FONT: &str = "sans-serif";

/// 12x5 inches at 300 dpi.
pub const DEFAULT_WIDTH: u32 = 3600;
pub const DEFAULT_HEIGHT: u32 = 1500;

/// Which delimiters surround hop addresses in the trace output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressDelimiters {
    /// `[a.b.c.d]`, as printed by Windows `tracert`.
    Brackets,
    /// `(a.b.c.d)`, as printed by Unix `traceroute`.
    Parens,
}

impl Default for AddressDelimiters {
    fn default() -> Self {
        if cfg!(windows) { Self::Brackets } else { Self::Parens }
    }
}

impl FromStr for AddressDelimiters {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brackets" | "[]" => Ok(Self::Brackets),
            "parens" | "()" => Ok(Self::Parens),
            _ => Err(format!("unknown delimiters: {s} (expected 'brackets' or 'parens')")),
        }
    }
}

/// Which leading hops are discarded before geolocation.
///
/// The first delimited address in `tracert`/`traceroute` output is the one in
/// the header line, so `DropFirst` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OriginPolicy {
    #[default]
    DropFirst,
    KeepAll,
}

impl FromStr for OriginPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "drop-first" => Ok(Self::DropFirst),
            "keep-all" => Ok(Self::KeepAll),
            _ => Err(format!("unknown origin policy: {s} (expected 'drop-first' or 'keep-all')")),
        }
    }
}

pub struct Config {
    /// Executable invoked with the host as its only argument.
    pub trace_program: String,
    pub delimiters: AddressDelimiters,
    pub origin_policy: OriginPolicy,
    /// Base URL of the geolocation service; the address is appended as a path segment.
    pub geo_endpoint: String,
    /// Where the rendered map is written.
    pub output: PathBuf,
    /// GeoJSON with coastlines and country borders; the bundled world outline when unset.
    pub basemap: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    /// Draws city names next to markers.
    pub labels: bool,
    /// Font family for the title and labels.
    pub font: String,
    /// Opens the written map in the default image viewer.
    pub open: bool,
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_program: DEFAULT_TRACE_PROGRAM.to_string(),
            delimiters: AddressDelimiters::default(),
            origin_policy: OriginPolicy::default(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            basemap: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            labels: true,
            font: DEFAULT_FONT.to_string(),
            open: false,
            quiet: 0,
            no_banner: false,
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
