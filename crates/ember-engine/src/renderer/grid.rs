use super::color::Color;

/// Recommended maximum edge length for a texture grid, in pixels.
pub const MAX_TEXTURE_LENGTH: u32 = 512;

/// A rectangular grid of colors, the pixel shape the image-decoding
/// collaborator hands to the core. Stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ColorGrid {
    /// Creates a fully transparent grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::default())
    }

    /// Creates a grid filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        warn_if_oversized(width, height);
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    /// Builds a grid from packed `a<<24 | r<<16 | g<<8 | b` pixels in
    /// row-major order. `pixels` must hold exactly `width * height` entries.
    pub fn from_packed(width: u32, height: u32, pixels: &[u32]) -> Self {
        assert_eq!(pixels.len(), (width * height) as usize);
        warn_if_oversized(width, height);
        Self {
            width,
            height,
            pixels: pixels.iter().map(|&p| Color::from_packed(p)).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`. Panics when the coordinate is out of range.
    pub fn get(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Overwrites the color at `(x, y)`. Panics when out of range.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// A copy mirrored around the vertical axis.
    pub fn flip_x(&self) -> ColorGrid {
        let mut out = self.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                out.set(self.width - 1 - x, y, self.get(x, y));
            }
        }
        out
    }

    /// A copy mirrored around the horizontal axis.
    pub fn flip_y(&self) -> ColorGrid {
        let mut out = self.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                out.set(x, self.height - 1 - y, self.get(x, y));
            }
        }
        out
    }
}

fn warn_if_oversized(width: u32, height: u32) {
    if width > MAX_TEXTURE_LENGTH || height > MAX_TEXTURE_LENGTH {
        log::warn!(
            "{}x{} texture exceeds the recommended maximum edge of {}; \
             expect high memory usage",
            width,
            height,
            MAX_TEXTURE_LENGTH
        );
    }
}
