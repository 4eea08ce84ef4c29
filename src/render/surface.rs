use kurbo::Shape as _;

use crate::{
    foundation::{
        core::{BezPath, Point, Rect, Rgba8, Size},
        error::{AssetGenError, AssetGenResult},
    },
    render::composite::{self, Placement},
    render::text::{TextBrushRgba8, TitleFont},
};

const PATH_TOLERANCE: f64 = 0.1;

/// Filled vector shape in surface pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Rect(Rect),
    RoundedRect { rect: Rect, radius: f64 },
    /// Ellipse inscribed in the bounding box.
    Ellipse(Rect),
}

impl ShapeKind {
    pub fn bounds(&self) -> Rect {
        match *self {
            ShapeKind::Rect(r) => r,
            ShapeKind::RoundedRect { rect, .. } => rect,
            ShapeKind::Ellipse(r) => r,
        }
    }

    fn to_path(self) -> BezPath {
        match self {
            ShapeKind::Rect(r) => r.to_path(PATH_TOLERANCE),
            ShapeKind::RoundedRect { rect, radius } => {
                kurbo::RoundedRect::from_rect(rect, radius).to_path(PATH_TOLERANCE)
            }
            ShapeKind::Ellipse(r) => kurbo::Ellipse::from_rect(r).to_path(PATH_TOLERANCE),
        }
    }
}

/// One immediate-mode drawing command.
pub enum DrawOp<'a> {
    Fill {
        shape: ShapeKind,
        color: Rgba8,
    },
    /// A laid-out line whose top-left corner sits at `origin`.
    Text {
        layout: &'a parley::Layout<TextBrushRgba8>,
        font: &'a TitleFont,
        origin: Point,
    },
}

/// Premultiplied RGBA8 pixel buffer, row-major, tightly packed.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(size: Size) -> AssetGenResult<Self> {
        let (width, height) = size.to_surface_dims()?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; size.area() * 4],
        })
    }

    /// Surface cleared to a single color.
    pub fn filled(size: Size, color: Rgba8) -> AssetGenResult<Self> {
        let mut surface = Self::new(size)?;
        let premul = color.to_premul();
        for px in surface.data.chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
        Ok(surface)
    }

    pub fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.width() as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Rasterize `ops` in order into a transparent layer and composite it over this surface.
    pub fn paint(&mut self, ops: &[DrawOp<'_>]) -> AssetGenResult<()> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        for op in ops {
            draw_op(&mut ctx, op);
        }
        ctx.flush();

        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut layer);
        composite::over_in_place(&mut self.data, layer.data_as_u8_slice())
            .map_err(|e| AssetGenError::render(format!("composite painted layer: {e}")))
    }

    /// Composite `src` with its own alpha as the mask, top-left at `(x, y)`.
    pub fn overlay(&mut self, src: &Surface, x: i64, y: i64) -> AssetGenResult<()> {
        let (dst_width, dst_height) = (self.width(), self.height());
        composite::over_at(
            &mut self.data,
            &src.data,
            Placement {
                dst_width,
                dst_height,
                src_width: src.width(),
                src_height: src.height(),
                x,
                y,
            },
        )
    }

    /// Flatten to an opaque RGB image by dropping alpha from the straight color.
    pub fn to_rgb_image(&self) -> AssetGenResult<image::RgbImage> {
        let mut rgb = Vec::with_capacity(self.size().area() * 3);
        for px in self.data.chunks_exact(4) {
            let a = u16::from(px[3]);
            for &c in &px[..3] {
                let straight = if a == 0 {
                    0
                } else {
                    ((u16::from(c) * 255 + a / 2) / a).min(255) as u8
                };
                rgb.push(straight);
            }
        }
        image::RgbImage::from_raw(self.width(), self.height(), rgb)
            .ok_or_else(|| AssetGenError::render("invalid rgb buffer size"))
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp<'_>) {
    match op {
        DrawOp::Fill { shape, color } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            ctx.fill_path(&bezpath_to_cpu(&shape.to_path()));
        }
        DrawOp::Text {
            layout,
            font,
            origin,
        } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };

                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));

                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(font.font_data())
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
