//! The square notification-card icon.
//!
//! Geometry is authored in a 100x100 unit space and scaled by `size / 100`, so every size is a
//! linear rescale of every other.

use crate::{
    foundation::{
        core::{Point, Rect, Rgba8, Size},
        error::AssetGenResult,
    },
    palette,
    render::surface::{DrawOp, ShapeKind, Surface},
};

/// Side length of the unit space the icon is authored in.
pub const ICON_UNITS: f64 = 100.0;

const CARD: (f64, f64, f64, f64) = (25.0, 35.0, 50.0, 30.0);
const CARD_RADIUS: f64 = 5.0;
const LINE_PRIMARY: (f64, f64, f64, f64) = (30.0, 43.0, 30.0, 4.0);
const LINE_SECONDARY: (f64, f64, f64, f64) = (30.0, 50.0, 20.0, 3.0);
const BADGE_CENTER: (f64, f64) = (70.0, 30.0);
const BADGE_RADIUS: f64 = 6.0;

/// A filled shape of the icon, already scaled to pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconShape {
    pub shape: ShapeKind,
    pub color: Rgba8,
}

impl IconShape {
    /// Same shape with every coordinate multiplied by `k`.
    pub fn scaled(self, k: f64) -> Self {
        let scale = |r: Rect| Rect::new(r.x0 * k, r.y0 * k, r.x1 * k, r.y1 * k);
        let shape = match self.shape {
            ShapeKind::Rect(r) => ShapeKind::Rect(scale(r)),
            ShapeKind::RoundedRect { rect, radius } => ShapeKind::RoundedRect {
                rect: scale(rect),
                radius: radius * k,
            },
            ShapeKind::Ellipse(r) => ShapeKind::Ellipse(scale(r)),
        };
        Self { shape, ..self }
    }
}

/// Icon foreground shapes for a `size` px icon, in paint order. The background fill is implied.
///
/// Boxes are half-open: `(x, y, w, h)` covers `[x, x + w) x [y, y + h)` in pixel space, so a
/// shape is never one pixel wider than its authored width. Raster tools that treat the far edge
/// as inclusive draw each box one pixel wider and taller.
pub fn icon_shapes(size: u32) -> Vec<IconShape> {
    let scale = f64::from(size) / ICON_UNITS;
    let rect_box = |(x, y, w, h): (f64, f64, f64, f64)| {
        Rect::new(x * scale, y * scale, (x + w) * scale, (y + h) * scale)
    };
    let badge = Rect::from_center_size(
        Point::new(BADGE_CENTER.0 * scale, BADGE_CENTER.1 * scale),
        (BADGE_RADIUS * 2.0 * scale, BADGE_RADIUS * 2.0 * scale),
    );

    vec![
        IconShape {
            shape: ShapeKind::RoundedRect {
                rect: rect_box(CARD),
                radius: CARD_RADIUS * scale,
            },
            color: palette::WHITE,
        },
        IconShape {
            shape: ShapeKind::Rect(rect_box(LINE_PRIMARY)),
            color: palette::GREY,
        },
        IconShape {
            shape: ShapeKind::Rect(rect_box(LINE_SECONDARY)),
            color: palette::GREY_LIGHT,
        },
        IconShape {
            shape: ShapeKind::Ellipse(badge),
            color: palette::RED,
        },
    ]
}

/// Draw the icon onto a fresh `size` x `size` surface with a blue background.
#[tracing::instrument(level = "debug")]
pub fn build_icon(size: u32) -> AssetGenResult<Surface> {
    let mut icon = Surface::filled(Size::square(size), palette::BLUE)?;
    let ops: Vec<DrawOp<'_>> = icon_shapes(size)
        .into_iter()
        .map(|s| DrawOp::Fill {
            shape: s.shape,
            color: s.color,
        })
        .collect();
    icon.paint(&ops)?;
    Ok(icon)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/icon.rs"]
mod tests;
