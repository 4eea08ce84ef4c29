use crate::foundation::error::AssetGenResult;
use crate::render::text::TextMeasure;

/// Smallest font size the fitter will return.
pub const FONT_FLOOR_PX: u32 = 10;
/// Decrement between candidate sizes.
pub const FONT_STEP_PX: u32 = 2;

/// Largest size in `target, target - 2, ...` (kept above the floor) whose measured width is at
/// most `max_width`; [`FONT_FLOOR_PX`] when none fits. The floor is returned unmeasured, so the
/// text may overflow at that size.
#[tracing::instrument(skip(measure), level = "debug")]
pub fn fit_font_size(
    measure: &mut dyn TextMeasure,
    text: &str,
    max_width: i64,
    target: u32,
) -> AssetGenResult<u32> {
    let mut size = target;
    while size > FONT_FLOOR_PX {
        let width = measure.measure_width(text, size as f32)?;
        if f64::from(width) <= max_width as f64 {
            tracing::debug!(size, width, "font size fits");
            return Ok(size);
        }
        size -= FONT_STEP_PX;
    }
    tracing::debug!(floor = FONT_FLOOR_PX, "no candidate fits, using floor");
    Ok(FONT_FLOOR_PX)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/fit.rs"]
mod tests;
