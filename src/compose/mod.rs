pub mod canvas;
pub mod fit;
pub mod icon;
