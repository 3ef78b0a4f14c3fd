pub mod color;
pub mod composite;
pub mod error;
pub mod filter;
pub mod store;

pub mod prelude {
    pub use crate::color::{Color, Pixel, squared_distance};
    pub use crate::composite::{Compositor, consensus::Consensus};
    pub use crate::error::{Error, Result};
    pub use crate::filter::{Filter, fire::FireHighlighter, warhol::Warhol};
    pub use crate::store::{
        Image,
        io::{load_image, load_images, save_image},
    };
}
