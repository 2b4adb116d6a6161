//! Shared types module - dimensions, constants and colors
//!
//! Everything here is plain data with no external dependencies so it can be
//! used by the geometry/transform core, the rasterizer and the terminal
//! presenter alike.
//!
//! # Grid Dimensions
//!
//! The display surface is a fixed 64x64 grid. The offscreen render target has
//! exactly the same size, so one grid cell always equals one sampled pixel:
//!
//! - **Width**: 64 cells (indexed 0-63)
//! - **Height**: 64 cells (indexed 0-63)
//! - **Pixel stride**: 4 bytes (RGBA, unsigned byte)
//!
//! # Scene Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FOV_Y_DEGREES` | 45 | Vertical field of view |
//! | `Z_NEAR` | 0.1 | Near clip plane |
//! | `Z_FAR` | 100 | Far clip plane |
//! | `CAMERA_DISTANCE` | 5 | Cube distance along the view axis |
//! | `FPS_REFRESH_INTERVAL` | 10 | Frames between FPS caption refreshes |
//!
//! # Examples
//!
//! ```
//! use cube_grid_types::{rgb_to_hex, component_to_hex, Rgb, GRID_WIDTH, GRID_HEIGHT};
//!
//! assert_eq!(GRID_WIDTH, 64);
//! assert_eq!(GRID_HEIGHT, 64);
//!
//! assert_eq!(component_to_hex(5), "05");
//! assert_eq!(rgb_to_hex(0, 128, 255), "#0080ff");
//! assert_eq!(Rgb::new(163, 73, 164).to_string(), "#a349a4");
//! ```

use std::fmt;

/// Grid width in cells (64 columns)
pub const GRID_WIDTH: u16 = 64;

/// Grid height in cells (64 rows)
pub const GRID_HEIGHT: u16 = 64;

/// Total number of grid cells (and sampled pixels).
pub const CELL_COUNT: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Bytes per framebuffer pixel (RGBA).
pub const BYTES_PER_PIXEL: usize = 4;

/// Length of one full RGBA read-back of the render target.
pub const FRAMEBUFFER_LEN: usize = CELL_COUNT * BYTES_PER_PIXEL;

/// Characters of overlay text packed into one grid cell.
pub const CHARS_PER_CELL: usize = 2;

/// Vertical field of view in degrees.
pub const FOV_Y_DEGREES: f32 = 45.0;

/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;

/// Far clip plane distance.
pub const Z_FAR: f32 = 100.0;

/// Distance of the cube from the eye along the view axis.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Angular speed factor of the first (Z) rotation.
pub const Z_AXIS_SPEED: f64 = 1.0;

/// Angular speed factor of the second (Y) rotation.
pub const Y_AXIS_SPEED: f64 = 0.618;

/// Angular speed factor of the third (X) rotation.
pub const X_AXIS_SPEED: f64 = -1.618;

/// The FPS caption is recomputed every Nth frame.
pub const FPS_REFRESH_INTERVAL: u64 = 10;

/// Glyph used in place of spaces so word gaps keep their width.
pub const BLANK_GLYPH: char = '\u{a0}';

/// Title written once at the center row.
pub const TITLE_TEXT: &str = "Software 3D to Cell Grid";

/// Row of the title caption.
pub const TITLE_ROW: u16 = GRID_HEIGHT / 2;

/// Row of the cell-count caption.
pub const CELLS_ROW: u16 = TITLE_ROW + 1;

/// Row of the periodically refreshed FPS caption.
pub const FPS_ROW: u16 = TITLE_ROW + 2;

/// Default scheduler cadence in milliseconds (~60 FPS).
pub const DEFAULT_FRAME_MS: u64 = 16;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized `[r, g, b, a]` floats with opaque alpha.
    pub fn to_unit_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Relative luma in `0..=255`, used to pick readable overlay text.
    pub fn luma(self) -> u8 {
        ((self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Two lowercase hex digits, zero-padded.
///
/// # Examples
///
/// ```
/// use cube_grid_types::component_to_hex;
///
/// assert_eq!(component_to_hex(0), "00");
/// assert_eq!(component_to_hex(5), "05");
/// assert_eq!(component_to_hex(255), "ff");
/// ```
pub fn component_to_hex(c: u8) -> String {
    format!("{:02x}", c)
}

/// `#` followed by one [`component_to_hex`] pair per channel.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');
    out.push_str(&component_to_hex(r));
    out.push_str(&component_to_hex(g));
    out.push_str(&component_to_hex(b));
    out
}

/// Cube faces in vertex/index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Top,
    Bottom,
    Right,
    Left,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Left,
    ];

    /// Flat color of the face.
    ///
    /// - **Front**: purple `#a349a4`
    /// - **Back**: yellow `#fff200`
    /// - **Top**: red `#ed1c24`
    /// - **Bottom**: blue `#3f48cc`
    /// - **Right**: orange `#ff7f27`
    /// - **Left**: green `#22b14c`
    pub fn color(&self) -> Rgb {
        match self {
            Face::Front => Rgb::new(0xA3, 0x49, 0xA4),
            Face::Back => Rgb::new(0xFF, 0xF2, 0x00),
            Face::Top => Rgb::new(0xED, 0x1C, 0x24),
            Face::Bottom => Rgb::new(0x3F, 0x48, 0xCC),
            Face::Right => Rgb::new(0xFF, 0x7F, 0x27),
            Face::Left => Rgb::new(0x22, 0xB1, 0x4C),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Right => "right",
            Face::Left => "left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encoding_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(0, 128, 255), "#0080ff");
        assert_eq!(component_to_hex(5), "05");
        assert_eq!(Rgb::new(0xED, 0x1C, 0x24).to_hex(), "#ed1c24");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), rgb_to_hex(1, 2, 3));
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in Face::ALL.iter().enumerate() {
            for b in Face::ALL.iter().skip(i + 1) {
                assert_ne!(a.color(), b.color(), "{} vs {}", a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn overlay_rows_are_stacked_under_center() {
        assert_eq!(TITLE_ROW, 32);
        assert_eq!(CELLS_ROW, 33);
        assert_eq!(FPS_ROW, 34);
        assert_eq!(FRAMEBUFFER_LEN, 64 * 64 * 4);
    }

    #[test]
    fn luma_separates_light_and_dark() {
        assert!(Rgb::new(255, 242, 0).luma() > 128);
        assert!(Rgb::new(63, 72, 204).luma() < 128);
        assert_eq!(Rgb::BLACK.luma(), 0);
    }
}
