//! multi-image compositing algorithms

pub mod consensus;

use itertools::Itertools;

use crate::{
    error::{Error, Result},
    store::Image,
};

pub trait Compositor {
    /// merges a stack of aligned images into a single new image
    fn compose(&self, images: &[Image]) -> Result<Image>;
}

/// the `(width, height)` shared by every image in the stack.
///
/// fails with [`Error::InvalidInput`] for an empty stack and [`Error::DimensionMismatch`] for
/// the first image whose size differs from the first one.
pub fn shared_dimensions(images: &[Image]) -> Result<(usize, usize)> {
    let expected = images
        .first()
        .ok_or_else(|| Error::InvalidInput("No images provided".into()))?
        .dimensions();

    match images
        .iter()
        .find_position(|image| image.dimensions() != expected)
    {
        Some((index, image)) => Err(Error::DimensionMismatch {
            index,
            expected,
            found: image.dimensions(),
        }),
        None => Ok(expected),
    }
}
