use crate::foundation::error::{AssetGenError, AssetGenResult};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied RGBA8.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// Composite an equally sized premultiplied buffer over `dst`.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> AssetGenResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AssetGenError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Placement of a source buffer inside a destination buffer.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub dst_width: u32,
    pub dst_height: u32,
    pub src_width: u32,
    pub src_height: u32,
    /// Top-left of the source in destination pixels; may be negative.
    pub x: i64,
    pub y: i64,
}

/// Composite `src` over `dst` at an integer offset, using the source alpha as the mask.
///
/// Source pixels falling outside the destination are clipped.
pub fn over_at(dst: &mut [u8], src: &[u8], p: Placement) -> AssetGenResult<()> {
    let dst_len = p.dst_width as usize * p.dst_height as usize * 4;
    let src_len = p.src_width as usize * p.src_height as usize * 4;
    if dst.len() != dst_len || src.len() != src_len {
        return Err(AssetGenError::validation(
            "over_at buffer length does not match its dimensions",
        ));
    }

    let x0 = p.x.max(0);
    let y0 = p.y.max(0);
    let x1 = (p.x + i64::from(p.src_width)).min(i64::from(p.dst_width));
    let y1 = (p.y + i64::from(p.src_height)).min(i64::from(p.dst_height));
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    let row_px = (x1 - x0) as usize;
    for dy in y0..y1 {
        let sy = (dy - p.y) as usize;
        let sx = (x0 - p.x) as usize;
        let d_start = (dy as usize * p.dst_width as usize + x0 as usize) * 4;
        let s_start = (sy * p.src_width as usize + sx) * 4;
        over_in_place(
            &mut dst[d_start..d_start + row_px * 4],
            &src[s_start..s_start + row_px * 4],
        )?;
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
