//! # Geographic Models
//!
//! What the geolocation collaborator returns ([`GeoRecord`]), what the map is
//! drawn from ([`GeoPoint`], [`Path`]) and the degrees/minutes/seconds
//! rendering used in reports ([`Dms`]).

use std::fmt;

/// Full answer of the geolocation collaborator for one address.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoRecord {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoRecord {
    /// "City, Region, Country", skipping empty parts.
    pub fn place(&self) -> String {
        [&self.city, &self.region, &self.country]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(", ")
    }

    pub fn to_point(&self) -> GeoPoint {
        GeoPoint {
            longitude: self.longitude,
            latitude: self.latitude,
            label: self.city.clone(),
        }
    }
}

/// A located hop. Coordinates are trusted from the collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub label: String,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64, label: impl Into<String>) -> Self {
        Self {
            longitude,
            latitude,
            label: label.into(),
        }
    }
}

/// Ordered points, index-aligned with the filtered hop list.
pub type Path = Vec<GeoPoint>;

/// Degrees, minutes and seconds of a decimal coordinate.
///
/// All three parts are unsigned magnitudes, so `-6.26` and `6.26` render the
/// same. The hemisphere is not recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Converts a decimal coordinate to [`Dms`].
///
/// Degrees and minutes are truncated toward zero before the sign is dropped.
pub fn decimal_to_dms(decimal: f64) -> Dms {
    let degrees: f64 = decimal.trunc();
    let minutes_float: f64 = (decimal - degrees) * 60.0;
    let minutes: f64 = minutes_float.trunc();
    let seconds: f64 = (minutes_float - minutes) * 60.0;

    Dms {
        degrees: degrees.abs() as u32,
        minutes: minutes.abs() as u32,
        seconds: seconds.abs(),
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {:.2}\"", self.degrees, self.minutes, self.seconds)
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

    #[test]
    fn dms_of_positive_latitude() {
        let dms: Dms = decimal_to_dms(53.3493795);
        assert_eq!(dms.degrees, 53);
        assert_eq!(dms.minutes, 20);
        assert!((dms.seconds - 57.7662).abs() < 0.01, "{}", dms.seconds);
        assert_eq!(dms.to_string(), "53° 20' 57.77\"");
    }

    #[test]
    fn dms_drops_the_sign() {
        let dms: Dms = decimal_to_dms(-6.2605593);
        assert_eq!(dms.degrees, 6);
        assert_eq!(dms.minutes, 15);
        assert!((dms.seconds - 38.01).abs() < 0.01, "{}", dms.seconds);
        assert_eq!(decimal_to_dms(6.2605593).to_string(), dms.to_string());
    }

    #[test]
    fn dms_of_small_negative_keeps_zero_degrees() {
        let dms: Dms = decimal_to_dms(-0.5);
        assert_eq!(dms.degrees, 0);
        assert_eq!(dms.minutes, 30);
        assert!(dms.seconds.abs() < 1e-9);
    }

    #[test]
    fn place_skips_empty_parts() {
        let record = GeoRecord {
            ip: "8.8.8.8".into(),
            city: "Mountain View".into(),
            region: String::new(),
            country: "United States".into(),
            latitude: 37.4,
            longitude: -122.1,
        };
        assert_eq!(record.place(), "Mountain View, United States");
        assert_eq!(record.to_point(), GeoPoint::new(-122.1, 37.4, "Mountain View"));
    }
}
