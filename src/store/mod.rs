//! in-memory images and their conversion to and from encoded files

pub mod io;

use image::{DynamicImage, RgbImage};
use itertools::iproduct;
use ndarray::Array2;

use crate::color::{Color, Pixel};

/// a rectangular grid of colors. the backing matrix is shaped `(width, height)` and indexed as
/// `[[x, y]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    colors: Array2<Color>,
}

impl Image {
    /// allocates a black image of the given size
    pub fn blank(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            colors: Array2::from_elem((width, height), color),
        }
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        Self {
            colors: Array2::from_shape_fn((width, height), |(x, y)| f(x, y)),
        }
    }

    pub fn width(&self) -> usize {
        self.colors.dim().0
    }

    pub fn height(&self) -> usize {
        self.colors.dim().1
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.colors.dim()
    }

    /// # Panics
    ///
    /// panics if `(x, y)` lies outside the image.
    pub fn color_at(&self, x: usize, y: usize) -> Color {
        self.colors[[x, y]]
    }

    /// # Panics
    ///
    /// panics if `(x, y)` lies outside the image.
    pub fn pixel_at(&self, x: usize, y: usize) -> Pixel {
        Pixel::new(x, y, self.color_at(x, y))
    }

    /// # Panics
    ///
    /// panics if `(x, y)` lies outside the image.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.colors[[x, y]] = color;
    }

    /// every pixel in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        iproduct!(0..self.height(), 0..self.width()).map(|(y, x)| self.pixel_at(x, y))
    }

    pub(crate) fn colors_mut(&mut self) -> &mut Array2<Color> {
        &mut self.colors
    }

    /// encodes into an 8-bit buffer, clamping channels that left `[0, 255]`
    pub fn to_rgb8(&self) -> RgbImage {
        let (width, height) = self.dimensions();
        RgbImage::from_fn(width as _, height as _, |x, y| {
            self.color_at(x as _, y as _).to_rgb8()
        })
    }
}

impl From<&RgbImage> for Image {
    fn from(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self::from_fn(width as _, height as _, |x, y| {
            Color::from(*image.get_pixel(x as _, y as _))
        })
    }
}

impl From<&DynamicImage> for Image {
    fn from(image: &DynamicImage) -> Self {
        Self::from(&image.to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn blank_has_requested_dimensions() {
        let image = Image::blank(4, 3);
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert!(image.pixels().all(|pixel| pixel.color == Color::BLACK));
    }

    #[test]
    fn blank_accepts_empty_dimensions() {
        let image = Image::blank(0, 5);
        assert_eq!(image.dimensions(), (0, 5));
        assert_eq!(image.pixels().count(), 0);
    }

    #[test]
    fn set_pixel_writes_a_single_coordinate() {
        let mut image = Image::blank(3, 2);
        image.set_pixel(2, 1, Color::RED);

        assert_eq!(image.color_at(2, 1), Color::RED);
        assert_eq!(image.color_at(1, 1), Color::BLACK);
        assert_eq!(image.pixel_at(2, 1), Pixel::new(2, 1, Color::RED));
    }

    #[test]
    fn pixels_iterate_rows_first() {
        let image = Image::from_fn(2, 2, |x, y| Color::grey((y * 2 + x) as i32));
        let coordinates: Vec<_> = image.pixels().map(|p| (p.x(), p.y())).collect();
        assert_eq!(coordinates, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

        let greys: Vec<_> = image.pixels().map(|p| p.color.red).collect();
        assert_eq!(greys, vec![0, 1, 2, 3]);
    }

    #[test]
    fn rgb8_conversion_preserves_layout() {
        let mut buffer = RgbImage::new(3, 2);
        buffer.put_pixel(2, 0, Rgb([1, 2, 3]));
        buffer.put_pixel(0, 1, Rgb([250, 251, 252]));

        let image = Image::from(&buffer);
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.color_at(2, 0), Color::new(1, 2, 3));
        assert_eq!(image.color_at(0, 1), Color::new(250, 251, 252));
        assert_eq!(image.to_rgb8(), buffer);
    }

    #[test]
    fn rgb8_conversion_clamps_channels() {
        let image = Image::filled(1, 1, Color::new(-1, 256, 42));
        assert_eq!(*image.to_rgb8().get_pixel(0, 0), Rgb([0, 255, 42]));
    }
}
