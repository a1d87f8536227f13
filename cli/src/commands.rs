pub mod locate;
pub mod trace;

use std::net::Ipv4Addr;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use geotrace_common::config::{
    AddressDelimiters, Config, DEFAULT_FONT, DEFAULT_GEO_ENDPOINT, DEFAULT_HEIGHT,
    DEFAULT_OUTPUT, DEFAULT_TRACE_PROGRAM, DEFAULT_WIDTH, OriginPolicy,
};
use geotrace_common::host::Host;

#[derive(Parser)]
#[command(name = "geotrace")]
#[command(version)]
#[command(about = "Trace the route to a host and draw it on a world map.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output: -q hides headers, -qq also hides per-hop details
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Base URL of the geolocation service
    #[arg(long, global = true, default_value = DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trace the route to a host and draw it on a map
    #[command(alias = "t")]
    Trace(TraceArgs),
    /// Geolocate a single IPv4 address
    #[command(alias = "l")]
    Locate { ip: Ipv4Addr },
}

#[derive(Args)]
pub struct TraceArgs {
    /// Domain to trace; prompted for when omitted
    pub host: Option<Host>,

    /// Trace utility, invoked with the host as its only argument
    #[arg(long, default_value = DEFAULT_TRACE_PROGRAM)]
    pub trace_program: String,

    /// Delimiters around hop addresses: 'brackets' (tracert) or 'parens' (traceroute)
    #[arg(long)]
    pub delimiters: Option<AddressDelimiters>,

    /// Leading hops to discard: 'drop-first' or 'keep-all'
    #[arg(long, default_value = "drop-first")]
    pub origin_policy: OriginPolicy,

    /// Where to write the map
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// GeoJSON file with coastlines and country borders
    #[arg(long)]
    pub basemap: Option<PathBuf>,

    /// Map width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Map height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Leave out the title and city labels
    #[arg(long)]
    pub no_labels: bool,

    /// Font family for the title and city labels
    #[arg(long, default_value = DEFAULT_FONT)]
    pub font: String,

    /// Open the map in the default image viewer once written
    #[arg(long)]
    pub open: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            geo_endpoint: self.geo_endpoint.clone(),
            quiet: self.quiet,
            no_banner: self.no_banner,
            ..Config::default()
        }
    }
}

impl TraceArgs {
    pub fn apply(&self, cfg: &mut Config) {
        cfg.trace_program = self.trace_program.clone();
        cfg.delimiters = self.delimiters.unwrap_or_else(|| delimiters_for(&self.trace_program));
        cfg.origin_policy = self.origin_policy;
        cfg.output = self.output.clone();
        cfg.basemap = self.basemap.clone();
        cfg.width = self.width;
        cfg.height = self.height;
        cfg.labels = !self.no_labels;
        cfg.font = self.font.clone();
        cfg.open = self.open;
    }
}

/// `tracert` brackets its addresses; anything else is assumed to parenthesize.
fn delimiters_for(program: &str) -> AddressDelimiters {
    let name: String = std::path::Path::new(program)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    if name == "tracert" {
        AddressDelimiters::Brackets
    } else {
        AddressDelimiters::Parens
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CommandLine, clap::Error> {
        CommandLine::try_parse_from(std::iter::once("geotrace").chain(args.iter().copied()))
    }

    #[test]
    fn trace_defaults() {
        let cli = parse(&["trace", "interia.pl"]).unwrap();
        let mut cfg = cli.config();
        let Commands::Trace(args) = &cli.command else {
            panic!("expected trace command");
        };
        args.apply(&mut cfg);

        assert_eq!(args.host.as_ref().map(Host::as_str), Some("interia.pl"));
        assert_eq!(cfg.trace_program, DEFAULT_TRACE_PROGRAM);
        assert_eq!(cfg.origin_policy, OriginPolicy::DropFirst);
        assert_eq!(cfg.output, PathBuf::from("mapa.png"));
        assert_eq!(cfg.geo_endpoint, DEFAULT_GEO_ENDPOINT);
        assert!(cfg.labels);
        assert_eq!(cfg.font, DEFAULT_FONT);
        assert!(cfg.basemap.is_none());
        assert!(!cfg.open);
    }

    #[test]
    fn map_flags_reach_config() {
        let cli = parse(&[
            "trace",
            "interia.pl",
            "--open",
            "--no-labels",
            "--font",
            "DejaVu Sans",
            "--basemap",
            "coast.geojson",
        ])
        .unwrap();
        let mut cfg = cli.config();
        let Commands::Trace(args) = &cli.command else {
            panic!("expected trace command");
        };
        args.apply(&mut cfg);

        assert!(cfg.open);
        assert!(!cfg.labels);
        assert_eq!(cfg.font, "DejaVu Sans");
        assert_eq!(cfg.basemap, Some(PathBuf::from("coast.geojson")));
    }

    #[test]
    fn host_is_optional() {
        let cli = parse(&["t"]).unwrap();
        assert!(matches!(cli.command, Commands::Trace(TraceArgs { host: None, .. })));
    }

    #[test]
    fn invalid_host_argument_is_rejected() {
        assert!(parse(&["trace", "bad_host"]).is_err());
    }

    #[test]
    fn delimiters_follow_trace_program() {
        assert_eq!(delimiters_for("tracert"), AddressDelimiters::Brackets);
        assert_eq!(delimiters_for("TRACERT.EXE"), AddressDelimiters::Brackets);
        assert_eq!(delimiters_for("/usr/sbin/traceroute"), AddressDelimiters::Parens);

        let cli = parse(&[
            "trace",
            "interia.pl",
            "--trace-program",
            "tracert",
            "--delimiters",
            "parens",
        ])
        .unwrap();
        let mut cfg = cli.config();
        if let Commands::Trace(args) = &cli.command {
            args.apply(&mut cfg);
        }
        assert_eq!(cfg.delimiters, AddressDelimiters::Parens);
    }

    #[test]
    fn global_flags_reach_config() {
        let cli = parse(&[
            "-qq",
            "locate",
            "8.8.8.8",
            "--geo-endpoint",
            "http://localhost:9/json",
        ])
        .unwrap();
        let cfg = cli.config();
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.geo_endpoint, "http://localhost:9/json");
        assert!(matches!(cli.command, Commands::Locate { ip } if ip == Ipv4Addr::new(8, 8, 8, 8)));
    }
}
