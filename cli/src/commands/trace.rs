use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use colored::*;
use geotrace_common::{
    config::Config, error::PipelineError, geo::Path, hop::HopAddress, host::Host, success,
};
use geotrace_core::geolocation::Resolved;
use geotrace_core::service::TraceService;

use crate::{
    mprint,
    terminal::{colors, format, input, print, spinner::SpinnerHandle, viewer},
};
use tracing::warn;

pub async fn trace(host: Option<Host>, cfg: &Config) -> anyhow::Result<()> {
    let host: Host = match host {
        Some(host) => host,
        None => input::prompt_host(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let service: TraceService = TraceService::from_config(cfg)?;

    let start_time: Instant = Instant::now();
    let spinner = SpinnerHandle::start(format!("Tracing route to {}", host.as_str().bold()));
    let hops: Vec<HopAddress> = service.trace(&host).await;
    spinner.finish_and_clear();
    let trace_time: Duration = start_time.elapsed();

    print::aligned_line("Trace", format!("{:.1}s", trace_time.as_secs_f64()).yellow());
    print_hops(&host, &hops, cfg);

    let intermediate: Vec<HopAddress> = service.intermediate_hops(hops);
    print::aligned_line("Hops", intermediate.len().to_string().bold());

    print::header("hop locations", cfg.quiet);
    let spinner = SpinnerHandle::start("Locating hops".to_string());
    let located = service
        .locate(&host, &intermediate, |idx, resolved| {
            spinner.set_message(format!("Located {}/{} hops", idx + 1, intermediate.len()));
            print_resolved(idx, resolved, cfg);
        })
        .await;
    spinner.finish_and_clear();

    let path: Path = match located {
        Ok(path) => path,
        Err(e @ PipelineError::EmptyPath { .. }) => {
            print::header("zero hops located", cfg.quiet);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let map: PathBuf = service.render(&path)?;
    trace_ends(&path, &map, start_time.elapsed(), cfg);

    if cfg.open {
        if let Err(e) = viewer::open(&map).await {
            warn!("Could not open the map: {e:#}");
        }
    }
    Ok(())
}

fn print_hops(host: &Host, hops: &[HopAddress], cfg: &Config) {
    if hops.is_empty() {
        return;
    }
    print::header(&format!("addresses traced to {host}"), cfg.quiet);
    if cfg.quiet > 1 {
        return;
    }
    for (idx, hop) in hops.iter().enumerate() {
        print::print_status(format!("{:>2} {}", idx, format::hop_to_value(hop)));
    }
}

fn print_resolved(idx: usize, resolved: &Resolved, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    print::hop_tree(idx, &resolved.point.label, &format::resolved_to_details(resolved));
    mprint!();
}

fn trace_ends(path: &Path, map: &std::path::Path, total_time: Duration, cfg: &Config) {
    let route: ColoredString = format::path_to_route(path).color(colors::PLACE);
    let points: ColoredString = format!("{} hops", path.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Route mapped: {points} in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::aligned_line("Route", route);
            print::fat_separator();
            print::centerln(output);
        }
        _ => {
            mprint!();
            success!("{}", output);
        }
    }
    success!("Map saved to {}", map.display());
}
