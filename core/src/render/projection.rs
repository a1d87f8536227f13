//! Miller cylindrical projection onto a pixel grid.

use std::f64::consts::FRAC_PI_4;

pub const LON_MIN: f64 = -180.0;
pub const LON_MAX: f64 = 180.0;
pub const LAT_MIN: f64 = -60.0;
pub const LAT_MAX: f64 = 90.0;

/// Miller northing of a latitude in degrees, in radians-equivalent units.
pub fn miller_y(latitude: f64) -> f64 {
    let phi: f64 = latitude.to_radians();
    1.25 * (FRAC_PI_4 + 0.4 * phi).tan().ln()
}

#[derive(Clone, Copy, Debug)]
pub struct Projection {
    width: f64,
    height: f64,
    y_top: f64,
    y_bottom: f64,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
            y_top: miller_y(LAT_MAX),
            y_bottom: miller_y(LAT_MIN),
        }
    }

    /// Pixel position of a coordinate. Latitudes outside the map are clamped.
    pub fn project(&self, longitude: f64, latitude: f64) -> (i32, i32) {
        let latitude: f64 = latitude.clamp(LAT_MIN, LAT_MAX);
        let x: f64 = (longitude - LON_MIN) / (LON_MAX - LON_MIN) * self.width;
        let y: f64 = (self.y_top - miller_y(latitude)) / (self.y_top - self.y_bottom) * self.height;
        (x.round() as i32, y.round() as i32)
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
