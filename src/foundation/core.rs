use crate::foundation::error::{AssetGenError, AssetGenResult};

pub use kurbo::{BezPath, Point, Rect};

/// Pixel dimensions of an output image or surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Construct a size without validation.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square size with equal sides.
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Validate that both sides are non-zero and fit the rasterizer's `u16` surface limit.
    pub fn to_surface_dims(self) -> AssetGenResult<(u16, u16)> {
        if self.width == 0 || self.height == 0 {
            return Err(AssetGenError::validation(format!(
                "surface size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| AssetGenError::validation("surface width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| AssetGenError::validation("surface height exceeds u16"))?;
        Ok((w, h))
    }

    /// Number of pixels (`width * height`).
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color channels at full alpha.
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Premultiply into the `[r, g, b, a]` byte layout used by surfaces.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
