//! # Trace-to-Map Service
//!
//! Orchestrates the pipeline:
//! 1. **Trace**: run the trace utility and extract hop addresses.
//! 2. **Filter**: drop the origin entry according to the configured policy.
//! 3. **Locate**: geolocate every hop in order, failing fast.
//! 4. **Render**: draw the ordered path.
//!
//! Each stage is exposed separately so the CLI can report between them;
//! [`TraceService::run`] chains all four. Nothing here exits the process:
//! every fatal condition comes back as a [`PipelineError`].

use std::path::PathBuf;

use geotrace_common::config::{Config, OriginPolicy};
use geotrace_common::error::PipelineError;
use geotrace_common::geo::{GeoPoint, Path};
use geotrace_common::hop::HopAddress;
use geotrace_common::host::Host;
use tracing::{debug, error, warn};

use crate::assemble::PathAssembler;
use crate::extract::HopExtractor;
use crate::filter;
use crate::geolocation::{GeoResolver, Geolocator, IpApiGeolocator, Resolved};
use crate::render::{MapRenderer, PathRenderer};
use crate::trace::{CommandTraceRunner, TraceRunner};

/// Everything a full run produced, in pipeline order.
#[derive(Debug)]
pub struct TraceReport {
    /// Every address found in the trace output.
    pub hops: Vec<HopAddress>,
    /// `hops` after the origin policy.
    pub intermediate: Vec<HopAddress>,
    pub path: Path,
    pub map: PathBuf,
}

pub struct TraceService {
    extractor: HopExtractor,
    origin_policy: OriginPolicy,
    assembler: PathAssembler,
    renderer: Box<dyn PathRenderer>,
}

impl TraceService {
    pub fn new(
        extractor: HopExtractor,
        origin_policy: OriginPolicy,
        geolocator: Box<dyn Geolocator>,
        renderer: Box<dyn PathRenderer>,
    ) -> Self {
        Self {
            extractor,
            origin_policy,
            assembler: PathAssembler::new(GeoResolver::new(geolocator)),
            renderer,
        }
    }

    /// Builds the service with the subprocess, HTTP and bitmap adapters.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let runner: Box<dyn TraceRunner> = Box::new(CommandTraceRunner::new(&cfg.trace_program));
        let geolocator: Box<dyn Geolocator> = Box::new(IpApiGeolocator::new(&cfg.geo_endpoint)?);
        let renderer: Box<dyn PathRenderer> = Box::new(MapRenderer::from_config(cfg)?);

        Ok(Self::new(
            HopExtractor::new(runner, cfg.delimiters),
            cfg.origin_policy,
            geolocator,
            renderer,
        ))
    }

    /// Runs the trace. A failed trace is reported and yields no hops; so is a
    /// trace whose output holds no addresses.
    pub async fn trace(&self, host: &Host) -> Vec<HopAddress> {
        match self.extractor.extract_hops(host).await {
            Ok(hops) if hops.is_empty() => {
                warn!("No IP addresses found for {host}");
                hops
            }
            Ok(hops) => {
                debug!("Trace to {host} returned {} addresses", hops.len());
                hops
            }
            Err(e) => {
                error!("Trace to {host} failed: {e}");
                Vec::new()
            }
        }
    }

    pub fn intermediate_hops(&self, hops: Vec<HopAddress>) -> Vec<HopAddress> {
        filter::apply(self.origin_policy, hops)
    }

    /// Geolocates `hops` in order, calling `on_resolved` after each success.
    ///
    /// An empty hop list is an error rather than an empty path.
    pub async fn locate<F>(
        &self,
        host: &Host,
        hops: &[HopAddress],
        on_resolved: F,
    ) -> Result<Path, PipelineError>
    where
        F: FnMut(usize, &Resolved),
    {
        if hops.is_empty() {
            return Err(PipelineError::EmptyPath {
                host: host.to_string(),
            });
        }
        Ok(self.assembler.assemble_with(hops, on_resolved).await?)
    }

    pub fn render(&self, path: &[GeoPoint]) -> Result<PathBuf, PipelineError> {
        self.renderer.render(path).map_err(PipelineError::Render)
    }

    pub async fn run<F>(&self, host: &Host, on_resolved: F) -> Result<TraceReport, PipelineError>
    where
        F: FnMut(usize, &Resolved),
    {
        let hops: Vec<HopAddress> = self.trace(host).await;
        let intermediate: Vec<HopAddress> = self.intermediate_hops(hops.clone());
        let path: Path = self.locate(host, &intermediate, on_resolved).await?;
        let map: PathBuf = self.render(&path)?;

        Ok(TraceReport {
            hops,
            intermediate,
            path,
            map,
        })
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
