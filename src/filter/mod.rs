//! single-image recoloring filters

pub mod fire;
pub mod warhol;

use crate::{error::Result, store::Image};

pub trait Filter {
    /// produces a new image, leaving `image` untouched
    fn apply(&self, image: &Image) -> Result<Image>;
}
