use std::path::Path;

use anyhow::{Context, Result};
use bmp::{Image, Pixel, px};

use crate::{
    cga::{image::CgaImage, palette},
    viewer::geometry::Geometry,
};

/// Writes the frame the window would show to a 24-bit BMP file.
pub fn render_bitmap(path: &Path, image: &CgaImage, geometry: &Geometry, width: u32, height: u32) -> Result<()> {
    let bg = palette::BACKGROUND;
    let mut img = Image::new(width, height);
    for (x, y) in img.coordinates() {
        img.set_pixel(x, y, px!(bg.r, bg.g, bg.b));
    }

    geometry.for_each_cell(image, &mut |rect, colour| {
        let x0 = rect.x.max(0) as u32;
        let y0 = rect.y.max(0) as u32;
        let x1 = std::cmp::min(width as i64, rect.x as i64 + rect.size as i64).max(0) as u32;
        let y1 = std::cmp::min(height as i64, rect.y as i64 + rect.size as i64).max(0) as u32;
        for y in y0..y1 {
            for x in x0..x1 {
                img.set_pixel(x, y, px!(colour.r, colour.g, colour.b));
            }
        }
    });

    img.save(path).with_context(|| format!("cannot write {}", path.display()))?;
    log::info!("wrote {}x{} frame to {}", width, height, path.display());
    Ok(())
}
