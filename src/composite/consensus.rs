use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use ndarray::Zip;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{
    color::{Color, squared_distance},
    composite::{Compositor, shared_dimensions},
    error::{Error, Result},
    store::Image,
};

/// constructs a composite image via the following method:
/// 1. gather the color at each coordinate from every image in the stack
/// 1. compute the mean of those colors, flooring each channel
/// 1. keep the gathered color closest to the mean, preferring earlier images on ties
///
/// transient subjects that appear in a minority of the stack are far from the mean and get
/// voted out, leaving the static background.
#[derive(Debug, Clone)]
pub struct Consensus {
    /// spread coordinates over a rayon thread pool. the output is identical either way.
    pub parallel: bool,

    /// the pool used when `parallel` is set. `None` runs on the global rayon pool.
    pub pool: Option<Arc<ThreadPool>>,
}

impl Default for Consensus {
    fn default() -> Self {
        Self {
            parallel: true,
            pool: None,
        }
    }
}

impl Compositor for Consensus {
    fn compose(&self, images: &[Image]) -> Result<Image> {
        self.compose_cancellable(images, &AtomicBool::new(false))
    }
}

impl Consensus {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            pool: None,
        }
    }

    /// a parallel compositor running on its own pool of `threads` workers
    pub fn with_threads(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
        Ok(Self {
            parallel: true,
            pool: Some(Arc::new(pool)),
        })
    }

    /// same as [`Compositor::compose`], but stops early once `cancel` is raised. the flag is
    /// polled once per coordinate and a cancelled run never returns a partial image.
    ///
    /// the flag is checked once more after the last coordinate, so raising it at any point
    /// before `compose_cancellable` returns discards the result, even one that was complete.
    pub fn compose_cancellable(&self, images: &[Image], cancel: &AtomicBool) -> Result<Image> {
        let (width, height) = shared_dimensions(images)?;

        log::debug!(
            "Computing the Consensus of {} images of size {}x{}",
            images.len(),
            width,
            height
        );

        let mut composite = Image::blank(width, height);

        let select = |(x, y): (usize, usize), slot: &mut Color| {
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            let colors = images.iter().map(|image| image.color_at(x, y));
            // non-empty stack, so a winner always exists
            if let Some(color) = consensus_color(colors) {
                *slot = color;
            }
        };

        let cells = Zip::indexed(composite.colors_mut());
        if self.parallel {
            let run = || cells.par_for_each(select);
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        } else {
            cells.for_each(select);
        }

        if cancel.load(Ordering::Relaxed) {
            log::debug!("Discarding the partial composite");
            return Err(Error::Cancelled);
        }

        Ok(composite)
    }
}

/// the floored per-channel mean of `colors`, or `None` if there are none
pub fn mean_color(colors: impl IntoIterator<Item = Color>) -> Option<Color> {
    let (count, red, green, blue) = colors
        .into_iter()
        .fold((0i64, 0i64, 0i64, 0i64), |(count, red, green, blue), color| {
            (
                count + 1,
                red + i64::from(color.red),
                green + i64::from(color.green),
                blue + i64::from(color.blue),
            )
        });

    if count == 0 {
        return None;
    }

    // a floored mean lies between the smallest and largest channel, so it fits back in an i32
    let mean = |sum: i64| sum.div_euclid(count) as i32;

    Some(Color::new(mean(red), mean(green), mean(blue)))
}

/// picks the color closest to the mean of `colors`. on ties the earliest candidate wins.
pub fn consensus_color<I>(colors: I) -> Option<Color>
where
    I: IntoIterator<Item = Color>,
    I::IntoIter: Clone,
{
    let colors = colors.into_iter();
    let mean = mean_color(colors.clone())?;
    let distance = |color: Color| squared_distance(color, mean.red, mean.green, mean.blue);

    let mut candidates = colors;
    let mut best = candidates.next()?;
    let mut best_distance = distance(best);

    for color in candidates {
        let color_distance = distance(color);
        if color_distance < best_distance {
            best = color;
            best_distance = color_distance;
        }
    }

    log::trace!("mean: {:?}, best: {:?}, distance: {}", mean, best, best_distance);

    Some(best)
}
