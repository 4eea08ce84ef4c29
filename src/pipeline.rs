use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use image::ImageEncoder as _;

use crate::{
    compose::{canvas::compose_canvas, icon::build_icon},
    config::GenerateOptions,
    foundation::{
        core::Size,
        error::{AssetGenError, AssetGenResult},
    },
    render::text::TitleFont,
    tiers::{DRIVER_OUTPUTS, MARKETING_OUTPUTS, Tier},
};

/// Which output tree an asset belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Marketing,
    Driver,
}

/// One file written by [`generate_all`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub tier: Tier,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Everything a run produced, in write order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GenerationReport {
    pub font: PathBuf,
    pub assets: Vec<GeneratedAsset>,
}

/// Create `dir` and its parents; existing directories are fine.
pub fn ensure_dir(dir: &Path) -> AssetGenResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| AssetGenError::io(dir, e))
}

/// Encode an opaque RGB image as PNG with maximum compression, replacing any existing file.
pub fn save_png(img: &image::RgbImage, path: &Path) -> AssetGenResult<()> {
    let file = File::create(path).map_err(|e| AssetGenError::io(path, e))?;
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        BufWriter::new(file),
        image::codecs::png::CompressionType::Best,
        image::codecs::png::FilterType::Adaptive,
    );
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// High-quality downsample to exact target dimensions.
pub fn resample(img: &image::RgbImage, size: Size) -> image::RgbImage {
    image::imageops::resize(
        img,
        size.width,
        size.height,
        image::imageops::FilterType::Lanczos3,
    )
}

fn write_asset(
    out: &mut Vec<GeneratedAsset>,
    kind: AssetKind,
    tier: Tier,
    dir: &Path,
    img: &image::RgbImage,
) -> AssetGenResult<()> {
    let path = dir.join(tier.file_name());
    save_png(img, &path)?;
    tracing::info!(
        kind = ?kind,
        %tier,
        width = img.width(),
        height = img.height(),
        path = %path.display(),
        "wrote asset"
    );
    out.push(GeneratedAsset {
        kind,
        tier,
        path,
        width: img.width(),
        height: img.height(),
    });
    Ok(())
}

/// Marketing images: the xlarge canvas is composed once and resampled for the smaller tiers.
pub fn generate_marketing(
    dir: &Path,
    font: &mut TitleFont,
    out: &mut Vec<GeneratedAsset>,
) -> AssetGenResult<()> {
    ensure_dir(dir)?;

    let base = compose_canvas(MARKETING_OUTPUTS.size(Tier::XLarge), font)?.to_rgb_image()?;
    write_asset(out, AssetKind::Marketing, Tier::XLarge, dir, &base)?;

    for tier in [Tier::Large, Tier::Small] {
        let resized = resample(&base, MARKETING_OUTPUTS.size(tier));
        write_asset(out, AssetKind::Marketing, tier, dir, &resized)?;
    }
    Ok(())
}

/// Driver icons: drawn directly at each tier's width.
pub fn generate_driver_icons(dir: &Path, out: &mut Vec<GeneratedAsset>) -> AssetGenResult<()> {
    ensure_dir(dir)?;

    for (tier, size) in DRIVER_OUTPUTS.entries() {
        let icon = build_icon(size.width)?.to_rgb_image()?;
        write_asset(out, AssetKind::Driver, tier, dir, &icon)?;
    }
    Ok(())
}

/// Regenerate every marketing image and driver icon under `opts.root`.
#[tracing::instrument(skip(opts), fields(root = %opts.root.display()))]
pub fn generate_all(opts: &GenerateOptions) -> AssetGenResult<GenerationReport> {
    let font_path = opts.font.resolve()?;
    let mut font = TitleFont::load(&font_path)?;
    tracing::info!(
        font = %font.path().display(),
        family = font.family_name(),
        "using title font"
    );

    let marketing_dir = opts.marketing_dir();
    let driver_dir = opts.driver_dir();

    let mut assets = Vec::with_capacity(6);
    generate_marketing(&marketing_dir, &mut font, &mut assets)?;
    generate_driver_icons(&driver_dir, &mut assets)?;

    Ok(GenerationReport {
        font: font_path,
        assets,
    })
}
