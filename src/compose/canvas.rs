use crate::{
    compose::{fit::fit_font_size, icon::build_icon},
    foundation::{
        core::{Point, Rect, Size},
        error::AssetGenResult,
    },
    palette,
    render::{
        surface::{DrawOp, ShapeKind, Surface},
        text::TitleFont,
    },
};

/// App name drawn next to the icon.
pub const TITLE: &str = "Ntfy me";

/// `⌊v * f⌋` truncated toward zero, the way every canvas fraction is computed.
fn frac(v: u32, f: f64) -> i64 {
    (f64::from(v) * f) as i64
}

/// Integer placement of the canvas elements for one canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasLayout {
    pub size: Size,
    pub icon_size: u32,
    pub icon_x: i64,
    pub icon_y: i64,
    pub text_x: i64,
    /// Horizontal budget for the title; may be zero or negative on tiny canvases.
    pub max_text_width: i64,
    pub target_font_size: u32,
}

impl CanvasLayout {
    pub fn for_size(size: Size) -> Self {
        let (w, h) = (size.width, size.height);
        let icon_size = frac(h, 0.5).max(0) as u32;
        let icon_x = frac(w, 0.1);
        let icon_y = (i64::from(h) - i64::from(icon_size)).div_euclid(2);
        let margin = frac(w, 0.06);
        let text_x = icon_x + i64::from(icon_size) + margin;
        let max_text_width = i64::from(w) - text_x - margin;
        let target_font_size = frac(h, 0.2).max(0) as u32;

        Self {
            size,
            icon_size,
            icon_x,
            icon_y,
            text_x,
            max_text_width,
            target_font_size,
        }
    }

    /// Title top edge for a laid-out line of `text_height` px, centered on the icon.
    pub fn text_y(&self, text_height: i64) -> i64 {
        self.icon_y + (i64::from(self.icon_size) - text_height).div_euclid(2)
    }
}

/// Decorative depth shapes, in paint order: dark ellipse, light ellipse, deep rectangle.
///
/// Each shape replaces the pixels under it with its palette RGB. The palette alpha would be
/// dropped by the RGB flatten, so the shapes are painted opaque.
pub fn background_shapes(size: Size) -> [DrawOp<'static>; 3] {
    let (w, h) = (size.width, size.height);
    let rect = |x0: i64, y0: i64, x1: i64, y1: i64| {
        Rect::new(x0 as f64, y0 as f64, x1 as f64, y1 as f64)
    };

    [
        DrawOp::Fill {
            shape: ShapeKind::Ellipse(rect(
                -frac(w, 0.45),
                -frac(h, 0.4),
                frac(w, 0.65),
                frac(h, 1.1),
            )),
            color: palette::BLUE_DARK.opaque(),
        },
        DrawOp::Fill {
            shape: ShapeKind::Ellipse(rect(
                frac(w, 0.45),
                -frac(h, 0.2),
                frac(w, 1.2),
                frac(h, 0.9),
            )),
            color: palette::BLUE_LIGHT.opaque(),
        },
        DrawOp::Fill {
            shape: ShapeKind::Rect(rect(
                frac(w, 0.35),
                frac(h, 0.7),
                frac(w, 1.1),
                frac(h, 1.05),
            )),
            color: palette::BLUE_DEEP.opaque(),
        },
    ]
}

/// Base fill, depth shapes and the pasted icon; everything except the title.
pub fn compose_background(size: Size) -> AssetGenResult<Surface> {
    let layout = CanvasLayout::for_size(size);
    let mut canvas = Surface::filled(size, palette::BLUE)?;
    canvas.paint(&background_shapes(size))?;

    let icon = build_icon(layout.icon_size)?;
    canvas.overlay(&icon, layout.icon_x, layout.icon_y)?;
    Ok(canvas)
}

/// Fit and draw the title to the right of the icon.
pub fn draw_title(
    canvas: &mut Surface,
    layout: &CanvasLayout,
    font: &mut TitleFont,
) -> AssetGenResult<()> {
    let font_size = fit_font_size(
        &mut *font,
        TITLE,
        layout.max_text_width,
        layout.target_font_size,
    )?;
    let line = font.layout(TITLE, font_size as f32, palette::WHITE)?;
    let text_height = line.height().round() as i64;
    let text_y = layout.text_y(text_height);
    tracing::debug!(
        font_size,
        text_x = layout.text_x,
        text_y,
        max_width = layout.max_text_width,
        "placing title"
    );

    canvas.paint(&[DrawOp::Text {
        layout: &line,
        font: &*font,
        origin: Point::new(layout.text_x as f64, text_y as f64),
    }])
}

/// The full marketing canvas: background, depth shapes, icon and title.
#[tracing::instrument(skip(font), fields(font = %font.family_name()))]
pub fn compose_canvas(size: Size, font: &mut TitleFont) -> AssetGenResult<Surface> {
    let layout = CanvasLayout::for_size(size);
    let mut canvas = compose_background(size)?;
    draw_title(&mut canvas, &layout, font)?;
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/canvas.rs"]
mod tests;
