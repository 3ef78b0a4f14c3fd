use std::path::PathBuf;

use clap::{Parser, Subcommand};
use exorcist::{filter::fire::INTENSITY_THRESHOLD, prelude::*};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Remove transient subjects from a directory of aligned photos
    Ghost {
        /// The directory containing the images
        image_dir: PathBuf,

        /// The path to save the composite
        #[arg(short, long, default_value = "ghost.png")]
        output: PathBuf,

        /// Process pixels on a single thread
        #[arg(long, default_value_t = false, conflicts_with = "threads")]
        sequential: bool,

        /// Number of worker threads, defaults to one per core
        #[arg(short = 'j', long)]
        threads: Option<usize>,
    },

    /// Turn sufficiently red pixels pure red and everything else grey
    Fire {
        /// The image to highlight
        image: PathBuf,

        /// The path to save the highlighted image
        #[arg(short, long, default_value = "fire.png")]
        output: PathBuf,

        /// How far red must exceed the pixel average to count as fire
        #[arg(short, long, default_value_t = INTENSITY_THRESHOLD)]
        threshold: f64,
    },

    /// Tile six recolored copies of an image into a 3x2 grid
    Warhol {
        /// The image to tile
        image: PathBuf,

        /// The path to save the tiled image
        #[arg(short, long, default_value = "warhol.png")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Ghost {
            image_dir,
            output,
            sequential,
            threads,
        } => {
            log::info!("Starting ghost removal for directory: {:?}", image_dir);
            let images = load_images(&image_dir)?;
            let compositor = match (sequential, threads) {
                (true, _) => Consensus::sequential(),
                (false, Some(threads)) => Consensus::with_threads(threads)?,
                (false, None) => Consensus::default(),
            };
            let composite = compositor.compose(&images)?;
            save_image(&composite, &output)?;
        }
        Command::Fire {
            image,
            output,
            threshold,
        } => {
            let image = load_image(&image)?;
            let highlighter = FireHighlighter {
                intensity_threshold: threshold,
            };
            save_image(&highlighter.apply(&image)?, &output)?;
        }
        Command::Warhol { image, output } => {
            let image = load_image(&image)?;
            save_image(&Warhol::default().apply(&image)?, &output)?;
        }
    }

    Ok(())
}
