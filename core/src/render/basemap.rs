//! Coastlines and borders read from GeoJSON.
//!
//! Only outlines are kept: every ring of a (Multi)Polygon and every
//! (Multi)LineString becomes one polyline in longitude/latitude.
//!
//! A coarse world outline (continents, major islands, inland seas and
//! country borders) is compiled in and used unless a file is given.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

const WORLD: &str = include_str!("../../assets/world.geojson");

#[derive(Clone, Debug, Default)]
pub struct Basemap {
    lines: Vec<Vec<(f64, f64)>>,
}

impl Basemap {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text: String = fs::read_to_string(path)
            .with_context(|| format!("reading basemap {}", path.display()))?;
        Self::from_geojson(&text).with_context(|| format!("parsing basemap {}", path.display()))
    }

    /// The bundled world outline.
    pub fn world() -> anyhow::Result<Self> {
        Self::from_geojson(WORLD).context("parsing bundled world outline")
    }

    pub fn from_geojson(text: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let mut lines: Vec<Vec<(f64, f64)>> = Vec::new();
        collect(&value, &mut lines);
        anyhow::ensure!(!lines.is_empty(), "no line or polygon geometry found");
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Vec<(f64, f64)>] {
        &self.lines
    }
}

fn collect(value: &Value, lines: &mut Vec<Vec<(f64, f64)>>) {
    let coords: &Value = &value["coordinates"];
    match value["type"].as_str() {
        Some("FeatureCollection") => each(&value["features"], |feature| collect(feature, lines)),
        Some("Feature") => collect(&value["geometry"], lines),
        Some("GeometryCollection") => each(&value["geometries"], |geometry| collect(geometry, lines)),
        Some("LineString") => lines.extend(line(coords)),
        Some("MultiLineString") | Some("Polygon") => {
            each(coords, |ring| lines.extend(line(ring)));
        }
        Some("MultiPolygon") => each(coords, |polygon| {
            each(polygon, |ring| lines.extend(line(ring)));
        }),
        _ => {}
    }
}

fn each<'a>(value: &'a Value, mut f: impl FnMut(&'a Value)) {
    if let Some(items) = value.as_array() {
        items.iter().for_each(|item| f(item));
    }
}

fn line(value: &Value) -> Option<Vec<(f64, f64)>> {
    value
        .as_array()?
        .iter()
        .map(|position| {
            let position = position.as_array()?;
            Some((position.first()?.as_f64()?, position.get(1)?.as_f64()?))
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
