use std::path::PathBuf;

/// A bold system font usable for the title, or `None` when the machine has none.
pub fn title_font() -> Option<PathBuf> {
    match ntfy_assetgen::FontSource::Auto.resolve() {
        Ok(p) => Some(p),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

pub fn png_dims(path: &std::path::Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}
