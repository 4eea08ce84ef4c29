use std::path::{Path, PathBuf};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{AssetGenError, AssetGenResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Something that can report the width of a single line of text.
///
/// The width is the line's advance width (pen travel from the origin), not the right edge of
/// the inked glyph outlines. For bold sans titles the two differ by the last glyph's side bearing.
pub trait TextMeasure {
    /// Advance width in pixels of `text` at `size_px`.
    fn measure_width(&mut self, text: &str, size_px: f32) -> AssetGenResult<f32>;
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font_bytes` with a fresh Parley font context.
    pub fn new(font_bytes: &[u8]) -> AssetGenResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| AssetGenError::font("no font families registered from font bytes"))?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AssetGenError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape and lay out a single unwrapped line.
    pub fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> AssetGenResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AssetGenError::font("text size_px must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasure for TextLayoutEngine {
    /// `Layout::width` of the unwrapped line.
    fn measure_width(&mut self, text: &str, size_px: f32) -> AssetGenResult<f32> {
        let layout = self.layout_line(text, size_px, TextBrushRgba8::default())?;
        Ok(layout.width())
    }
}

/// The title typeface: raw bytes for the rasterizer plus a layout engine for shaping.
pub struct TitleFont {
    path: PathBuf,
    data: vello_cpu::peniko::FontData,
    engine: TextLayoutEngine,
}

impl TitleFont {
    /// Read and register a TrueType/OpenType font file.
    pub fn load(path: &Path) -> AssetGenResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| AssetGenError::io(path, e))?;
        Self::from_bytes(path, bytes)
            .map_err(|e| AssetGenError::font(format!("load '{}': {e}", path.display())))
    }

    fn from_bytes(path: &Path, bytes: Vec<u8>) -> AssetGenResult<Self> {
        let engine = TextLayoutEngine::new(&bytes)?;
        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        tracing::debug!(path = %path.display(), family = engine.family_name(), "loaded title font");
        Ok(Self {
            path: path.to_path_buf(),
            data,
            engine,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn family_name(&self) -> &str {
        self.engine.family_name()
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }

    /// Lay out `text` at `size_px` in a single color.
    pub fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        color: Rgba8,
    ) -> AssetGenResult<parley::Layout<TextBrushRgba8>> {
        self.engine.layout_line(text, size_px, color.into())
    }
}

impl TextMeasure for TitleFont {
    fn measure_width(&mut self, text: &str, size_px: f32) -> AssetGenResult<f32> {
        self.engine.measure_width(text, size_px)
    }
}
