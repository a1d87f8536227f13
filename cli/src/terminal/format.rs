use colored::*;
use geotrace_common::geo::GeoPoint;
use geotrace_common::hop::HopAddress;
use geotrace_core::geolocation::Resolved;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn hop_to_value(hop: &HopAddress) -> ColoredString {
    hop.as_str().color(colors::IPV4_ADDR)
}

pub fn resolved_to_details(resolved: &Resolved) -> Vec<Detail> {
    let record = &resolved.record;
    let coords: String = format!("Lat: {}, Lng: {}", record.latitude, record.longitude);

    vec![
        ("IP".to_string(), record.ip.as_str().color(colors::IPV4_ADDR)),
        ("Place".to_string(), record.place().color(colors::PLACE)),
        ("GPS".to_string(), coords.color(colors::COORDINATES)),
        (
            "Lat DMS".to_string(),
            resolved.latitude_dms.to_string().color(colors::COORDINATES),
        ),
        (
            "Lng DMS".to_string(),
            resolved.longitude_dms.to_string().color(colors::COORDINATES),
        ),
    ]
}

/// "Warsaw → Berlin → London", with a placeholder for unnamed points.
pub fn path_to_route(path: &[GeoPoint]) -> String {
    path.iter()
        .map(|point| {
            if point.label.is_empty() {
                format!("({:.2}, {:.2})", point.latitude, point.longitude)
            } else {
                point.label.clone()
            }
        })
        .collect::<Vec<String>>()
        .join(" → ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
