use crate::{color::Color, error::Result, filter::Filter, store::Image};

pub const PATCH_COLUMNS: usize = 3;
pub const PATCH_ROWS: usize = 2;

/// channel scales `[red, green, blue]` for each patch, in row-major order
pub const WARHOL_PATCHES: [[i32; 3]; PATCH_COLUMNS * PATCH_ROWS] = [
    [0, 2, 1],
    [0, 0, 2],
    [1, 0, 1],
    [2, 2, 3],
    [0, 1, 1],
    [3, 2, 0],
];

/// tiles recolored copies of an image into a 3x2 grid, one patch per entry of `patches`.
#[derive(Debug, Clone)]
pub struct Warhol {
    pub patches: [[i32; 3]; PATCH_COLUMNS * PATCH_ROWS],
}

impl Default for Warhol {
    fn default() -> Self {
        Self {
            patches: WARHOL_PATCHES,
        }
    }
}

impl Filter for Warhol {
    fn apply(&self, image: &Image) -> Result<Image> {
        let (width, height) = image.dimensions();

        log::debug!("Scaling {} patches", self.patches.len());

        let patches: Vec<_> = self
            .patches
            .iter()
            .map(|&[red, green, blue]| scale(image, red, green, blue))
            .collect();

        log::debug!("Tiling the patches");

        // zero-sized inputs produce an empty grid, so the closure never divides by zero
        let tiled = Image::from_fn(width * PATCH_COLUMNS, height * PATCH_ROWS, |x, y| {
            let (column, row) = (x / width, y / height);
            patches[row * PATCH_COLUMNS + column].color_at(x % width, y % height)
        });

        Ok(tiled)
    }
}

/// a copy of `image` with every channel multiplied by its scale. results may exceed 255 and
/// are only clamped when encoded.
pub fn scale(image: &Image, red_scale: i32, green_scale: i32, blue_scale: i32) -> Image {
    let (width, height) = image.dimensions();
    Image::from_fn(width, height, |x, y| {
        image
            .color_at(x, y)
            .scale(red_scale, green_scale, blue_scale)
    })
}
