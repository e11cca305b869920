pub mod image;
pub mod palette;
