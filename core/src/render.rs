//! # Path Rendering
//!
//! Draws the located path on a world map and writes it as a raster image.
//!
//! Drawing order: map boundary and graticule, basemap outlines, one marker
//! and label per point, an arrow for each consecutive pair, and finally a
//! single line through all points in path order.
//!
//! Text needs a system font. When the title or a label cannot be drawn the
//! map is redrawn without any text rather than failing the run.

use std::path::PathBuf;

use anyhow::Context;
use geotrace_common::config::{Config, DEFAULT_FONT};
use geotrace_common::geo::GeoPoint;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::{debug, warn};

pub mod basemap;
pub mod projection;

use basemap::Basemap;
use projection::{LAT_MAX, LAT_MIN, LON_MAX, LON_MIN, Projection};

const TITLE: &str = "Packet routes";
const MARGIN: i32 = 20;
const MARKER_RADIUS: i32 = 8;
const LABEL_OFFSET: i32 = 10;
const ARROW_HEAD: f64 = 18.0;
const ARROW_ANGLE: f64 = 0.45;
const GRATICULE_STEP: usize = 30;

const ARROW_COLOR: RGBColor = MAGENTA;
const GRID_COLOR: RGBColor = RGBColor(200, 200, 200);
const LAND_COLOR: RGBColor = RGBColor(90, 90, 90);

/// Consumes an ordered path and persists a picture of it.
pub trait PathRenderer: Send + Sync {
    /// Returns where the artefact was written.
    fn render(&self, path: &[GeoPoint]) -> anyhow::Result<PathBuf>;
}

pub struct MapRenderer {
    output: PathBuf,
    width: u32,
    height: u32,
    basemap: Option<Basemap>,
    labels: bool,
    font: String,
}

impl MapRenderer {
    pub fn new(output: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            output: output.into(),
            width,
            height,
            basemap: None,
            labels: true,
            font: DEFAULT_FONT.to_string(),
        }
    }

    /// Uses the configured basemap file, or the bundled world outline.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let basemap: Basemap = match cfg.basemap.as_deref() {
            Some(path) => Basemap::load(path)?,
            None => Basemap::world()?,
        };
        Ok(Self::new(&cfg.output, cfg.width, cfg.height)
            .with_basemap(Some(basemap))
            .with_labels(cfg.labels)
            .with_font(&cfg.font))
    }

    pub fn with_basemap(mut self, basemap: Option<Basemap>) -> Self {
        self.basemap = basemap;
        self
    }

    /// Toggles the title and city labels. Both need a system font.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.font = family.into();
        self
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, plotters::coord::Shift>,
        path: &[GeoPoint],
        labels: bool,
    ) -> anyhow::Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let area = if labels {
            root.titled(TITLE, (self.font.as_str(), 40))?
        } else {
            root.clone()
        };
        let area = area.margin(MARGIN, MARGIN, MARGIN, MARGIN);
        let (width, height) = area.dim_in_pixel();
        let projection = Projection::new(width.saturating_sub(1), height.saturating_sub(1));

        for line in graticule() {
            area.draw(&PathElement::new(project_all(&projection, &line), GRID_COLOR))?;
        }
        area.draw(&Rectangle::new(
            [(0, 0), (width as i32 - 1, height as i32 - 1)],
            BLACK.stroke_width(2),
        ))?;

        if let Some(basemap) = &self.basemap {
            for line in basemap.lines() {
                area.draw(&PathElement::new(project_all(&projection, line), LAND_COLOR))?;
            }
        }

        let pixels: Vec<(i32, i32)> = path
            .iter()
            .map(|point| projection.project(point.longitude, point.latitude))
            .collect();

        let label_style = (self.font.as_str(), 28)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (point, &(x, y)) in path.iter().zip(&pixels) {
            area.draw(&Circle::new((x, y), MARKER_RADIUS, RED.filled()))?;
            if labels && !point.label.is_empty() {
                area.draw(&Text::new(
                    point.label.clone(),
                    (x, y - MARKER_RADIUS - LABEL_OFFSET),
                    label_style.clone(),
                ))?;
            }
        }

        for (from, to) in connectors(&pixels) {
            for segment in arrow_segments(from, to) {
                area.draw(&PathElement::new(segment.to_vec(), ARROW_COLOR.stroke_width(2)))?;
            }
        }

        area.draw(&PathElement::new(pixels, BLUE.stroke_width(2)))?;
        Ok(())
    }
}

impl PathRenderer for MapRenderer {
    fn render(&self, path: &[GeoPoint]) -> anyhow::Result<PathBuf> {
        anyhow::ensure!(!path.is_empty(), "refusing to render an empty path");

        let root = BitMapBackend::new(&self.output, (self.width, self.height)).into_drawing_area();
        if let Err(e) = self.draw(&root, path, self.labels) {
            if !self.labels {
                return Err(e);
            }
            warn!("Drawing the map without text: {e:#}");
            self.draw(&root, path, false)?;
        }
        root.present()
            .with_context(|| format!("writing {}", self.output.display()))?;

        debug!(output = %self.output.display(), points = path.len(), "map rendered");
        Ok(self.output.clone())
    }
}

/// Consecutive pairs `(i, i + 1)` in path order.
pub fn connectors<T: Copy>(points: &[T]) -> Vec<(T, T)> {
    points.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Shaft plus the two barbs of an arrow pointing at `to`.
///
/// A zero-length arrow has no direction and yields only its shaft.
pub fn arrow_segments(from: (i32, i32), to: (i32, i32)) -> Vec<[(i32, i32); 2]> {
    let mut segments: Vec<[(i32, i32); 2]> = vec![[from, to]];

    let dx: f64 = f64::from(from.0 - to.0);
    let dy: f64 = f64::from(from.1 - to.1);
    if dx == 0.0 && dy == 0.0 {
        return segments;
    }

    let back: f64 = dy.atan2(dx);
    for angle in [back + ARROW_ANGLE, back - ARROW_ANGLE] {
        let barb: (i32, i32) = (
            to.0 + (ARROW_HEAD * angle.cos()).round() as i32,
            to.1 + (ARROW_HEAD * angle.sin()).round() as i32,
        );
        segments.push([to, barb]);
    }
    segments
}

fn project_all(projection: &Projection, line: &[(f64, f64)]) -> Vec<(i32, i32)> {
    line.iter()
        .map(|&(lon, lat)| projection.project(lon, lat))
        .collect()
}

fn graticule() -> Vec<Vec<(f64, f64)>> {
    let meridians = (LON_MIN as i32..=LON_MAX as i32)
        .step_by(GRATICULE_STEP)
        .map(|lon| vec![(f64::from(lon), LAT_MIN), (f64::from(lon), LAT_MAX)]);
    let parallels = (LAT_MIN as i32..=LAT_MAX as i32)
        .step_by(GRATICULE_STEP)
        .map(|lat| {
            (LON_MIN as i32..=LON_MAX as i32)
                .step_by(GRATICULE_STEP)
                .map(|lon| (f64::from(lon), f64::from(lat)))
                .collect::<Vec<(f64, f64)>>()
        });
    meridians.chain(parallels).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
