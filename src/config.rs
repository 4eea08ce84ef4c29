use std::path::{Path, PathBuf};

use crate::foundation::error::{AssetGenError, AssetGenResult};

/// Bold sans-serif fonts tried in order when no font is given explicitly.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial_Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Where the title font comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSource {
    /// First existing entry of [`DEFAULT_FONT_CANDIDATES`].
    #[default]
    Auto,
    /// An explicit font file.
    Path(PathBuf),
}

impl FontSource {
    /// Resolve to an existing file path.
    pub fn resolve(&self) -> AssetGenResult<PathBuf> {
        match self {
            FontSource::Path(p) => {
                if p.is_file() {
                    Ok(p.clone())
                } else {
                    Err(AssetGenError::font(format!(
                        "font file '{}' does not exist",
                        p.display()
                    )))
                }
            }
            FontSource::Auto => first_existing(DEFAULT_FONT_CANDIDATES.iter().map(Path::new))
                .ok_or_else(|| {
                    AssetGenError::font(
                        "no bold title font found in the default locations; pass --font <FILE>",
                    )
                }),
        }
    }
}

fn first_existing<'a>(candidates: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

/// Inputs of one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory the `assets/` and `drivers/` output trees are created under.
    pub root: PathBuf,
    pub font: FontSource,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
            font: FontSource::Auto,
        }
    }
}

impl GenerateOptions {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// `<root>/assets/images`
    pub fn marketing_dir(&self) -> PathBuf {
        self.root.join("assets").join("images")
    }

    /// `<root>/drivers/ntfy-me/assets/images`
    pub fn driver_dir(&self) -> PathBuf {
        self.root
            .join("drivers")
            .join("ntfy-me")
            .join("assets")
            .join("images")
    }
}
