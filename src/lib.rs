//! Offline generator for the Ntfy me store images and driver icons.
//!
//! The icon and marketing canvases are drawn with constant geometry onto CPU surfaces
//! (`vello_cpu`), the title is shaped with Parley, and results are written as opaque PNGs:
//!
//! - [`build_icon`] draws the square notification-card icon at any size
//! - [`compose_canvas`] draws a marketing canvas with depth shapes, icon and fitted title
//! - [`generate_all`] regenerates every output under a root directory
#![forbid(unsafe_code)]

mod foundation;

pub mod compose;
pub mod config;
pub mod palette;
pub mod pipeline;
pub mod render;
pub mod tiers;

pub use crate::compose::canvas::{CanvasLayout, TITLE, compose_canvas};
pub use crate::compose::fit::{FONT_FLOOR_PX, fit_font_size};
pub use crate::compose::icon::{build_icon, icon_shapes};
pub use crate::config::{FontSource, GenerateOptions};
pub use crate::foundation::core::{Rect, Rgba8, Size};
pub use crate::foundation::error::{AssetGenError, AssetGenResult};
pub use crate::pipeline::{AssetKind, GeneratedAsset, GenerationReport, generate_all};
pub use crate::render::surface::Surface;
pub use crate::render::text::{TextMeasure, TitleFont};
pub use crate::tiers::{DRIVER_OUTPUTS, MARKETING_OUTPUTS, OutputTable, Tier};
