use crate::{color::Color, error::Result, filter::Filter, store::Image};

/// how much the red channel must exceed the pixel's average for it to count as fire
pub const INTENSITY_THRESHOLD: f64 = 1.05;

/// highlights fires in satellite imagery: "sufficiently red" pixels become pure red and
/// everything else is flattened to grey.
#[derive(Debug, Clone)]
pub struct FireHighlighter {
    pub intensity_threshold: f64,
}

impl Default for FireHighlighter {
    fn default() -> Self {
        Self {
            intensity_threshold: INTENSITY_THRESHOLD,
        }
    }
}

impl Filter for FireHighlighter {
    fn apply(&self, image: &Image) -> Result<Image> {
        log::debug!(
            "Highlighting fires with intensity threshold {}",
            self.intensity_threshold
        );

        let (width, height) = image.dimensions();
        let highlighted =
            Image::from_fn(width, height, |x, y| self.highlight(image.color_at(x, y)));

        Ok(highlighted)
    }
}

impl FireHighlighter {
    pub fn highlight(&self, color: Color) -> Color {
        let sum = i64::from(color.red) + i64::from(color.green) + i64::from(color.blue);
        let average = sum.div_euclid(3) as i32;

        if f64::from(color.red) >= f64::from(average) * self.intensity_threshold {
            Color::RED
        } else {
            Color::grey(average)
        }
    }
}
