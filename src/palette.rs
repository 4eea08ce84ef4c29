//! Brand palette shared by the icon and the marketing canvases.

use crate::foundation::core::Rgba8;

pub const BLUE: Rgba8 = Rgba8::new(26, 115, 232, 255);
pub const BLUE_DARK: Rgba8 = Rgba8::new(21, 101, 192, 255);
pub const BLUE_LIGHT: Rgba8 = Rgba8::new(66, 133, 244, 210);
pub const BLUE_DEEP: Rgba8 = Rgba8::new(15, 76, 158, 200);
pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
pub const GREY: Rgba8 = Rgba8::new(95, 99, 104, 255);
pub const GREY_LIGHT: Rgba8 = Rgba8::new(189, 193, 198, 255);
pub const RED: Rgba8 = Rgba8::new(234, 67, 53, 255);
