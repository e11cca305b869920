use crate::{
    cga::{image::CgaImage, palette::{self, Rgb}},
    error::{CgaError, Degenerate},
};

/// A filled, zoom x zoom square in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

/// Uniform scale and centring of an image inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub zoom: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Geometry {
    pub fn fit(window_width: u32, window_height: u32, image: &CgaImage) -> Result<Self, CgaError> {
        // cell coordinates are i32
        if window_width > i32::MAX as u32 || window_height > i32::MAX as u32 {
            return Err(CgaError::WindowTooLarge{ width: window_width, height: window_height });
        }
        if image.is_empty() {
            return Err(CgaError::DegenerateImage(Degenerate::Empty));
        }
        if image.width() == 0 {
            return Err(CgaError::DegenerateImage(Degenerate::ZeroWidth));
        }
        let width = u32::try_from(image.width()).unwrap_or(u32::MAX);
        let height = u32::try_from(image.height()).unwrap_or(u32::MAX);

        let zoom = std::cmp::min(window_width / width, window_height / height);
        if zoom == 0 {
            return Err(CgaError::DegenerateImage(Degenerate::TooLarge{ width, height }));
        }

        // zoom >= 1 means the scaled image fits, so both offsets are >= 0
        let offset_x = ((window_width - width * zoom) / 2) as i32;
        let offset_y = ((window_height - height * zoom) / 2) as i32;
        log::debug!("{}x{} in {}x{}: zoom {}, offset ({}, {})",
            width, height, window_width, window_height, zoom, offset_x, offset_y);
        Ok(Self{ zoom, offset_x, offset_y })
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> CellRect {
        let zoom = self.zoom as i32;
        CellRect{
            x: self.offset_x + x as i32 * zoom,
            y: self.offset_y + y as i32 * zoom,
            size: self.zoom,
        }
    }

    /// Calls `fill` for every coloured cell, rows top to bottom and columns
    /// left to right. Cells past the end of a short row and characters
    /// outside the palette are left as background.
    pub fn for_each_cell(&self, image: &CgaImage, fill: &mut dyn FnMut(CellRect, Rgb)) {
        for (y, row) in image.rows().iter().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                if let Some(colour) = palette::lookup(ch) {
                    fill(self.cell_rect(x, y), colour);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cga::{image::Limits, palette::PALETTE};

    fn image(text: &str) -> CgaImage {
        CgaImage::parse(text.as_bytes(), &Limits::default()).unwrap()
    }

    fn cells(geometry: &Geometry, image: &CgaImage) -> Vec<(CellRect, Rgb)> {
        let mut cells = Vec::new();
        geometry.for_each_cell(image, &mut |rect, colour| cells.push((rect, colour)));
        cells
    }

    #[test]
    fn exact_fit_has_no_offset() {
        let img = image("12;\n1234;\nno-terminator-here\n5;\n");
        let geometry = Geometry::fit(800, 600, &img).unwrap();
        assert_eq!(geometry, Geometry{ zoom: 200, offset_x: 0, offset_y: 0 });
    }

    #[test]
    fn smaller_axis_decides_zoom_and_other_axis_is_centred() {
        // 3x1: zoom_x = 266, zoom_y = 600
        let img = image("123;\n");
        let geometry = Geometry::fit(800, 600, &img).unwrap();
        assert_eq!(geometry.zoom, 266);
        assert_eq!(geometry.offset_x, 1);
        assert_eq!(geometry.offset_y, 167);
    }

    #[test]
    fn no_rows_is_degenerate() {
        let img = image("nothing here\n");
        assert!(matches!(Geometry::fit(800, 600, &img), Err(CgaError::DegenerateImage(Degenerate::Empty))));
    }

    #[test]
    fn empty_rows_are_degenerate() {
        let img = image(";\n;\n");
        assert!(matches!(Geometry::fit(800, 600, &img), Err(CgaError::DegenerateImage(Degenerate::ZeroWidth))));
    }

    #[test]
    fn image_wider_than_window_is_degenerate() {
        let img = image(&format!("{};\n", "1".repeat(9)));
        match Geometry::fit(8, 600, &img) {
            Err(CgaError::DegenerateImage(Degenerate::TooLarge{ width, height })) => {
                assert_eq!((width, height), (9, 1));
            },
            _ => panic!("expected TooLarge"),
        }
    }

    #[test]
    fn cells_follow_rows_and_skip_background() {
        let img = image("18;\n9;\n0234;\n");
        let geometry = Geometry{ zoom: 10, offset_x: 5, offset_y: 7 };
        let cells = cells(&geometry, &img);
        assert_eq!(cells, vec![
            (CellRect{ x: 5, y: 7, size: 10 }, PALETTE[0]),
            (CellRect{ x: 15, y: 7, size: 10 }, PALETTE[7]),
            (CellRect{ x: 15, y: 27, size: 10 }, PALETTE[1]),
            (CellRect{ x: 25, y: 27, size: 10 }, PALETTE[2]),
            (CellRect{ x: 35, y: 27, size: 10 }, PALETTE[3]),
        ]);
    }

    #[test]
    fn short_rows_draw_only_their_own_cells() {
        let img = image("1;\n2222;\n");
        let geometry = Geometry::fit(800, 600, &img).unwrap();
        let cells = cells(&geometry, &img);
        assert_eq!(cells.iter().filter(|(rect, _)| rect.y == geometry.offset_y).count(), 1);
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn cell_plan_is_reproducible() {
        let img = image("12345678;\n87654321;\n");
        let geometry = Geometry::fit(640, 480, &img).unwrap();
        assert_eq!(cells(&geometry, &img), cells(&geometry, &img));
    }

    #[test]
    fn window_beyond_i32_is_rejected() {
        let img = image("12;\n");
        let result = Geometry::fit(u32::MAX, 600, &img);
        assert!(matches!(result, Err(CgaError::WindowTooLarge{ width: u32::MAX, height: 600 })));
        assert!(Geometry::fit(i32::MAX as u32, 600, &img).is_ok());
    }
}
