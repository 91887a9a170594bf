//! # question-assets
//!
//! Asset preparation for question banks built from PDF exams.
//!
//! ## What this crate does
//!
//! 1. **Extract images** — walks every page of a PDF, collects each image
//!    XObject in page-then-position order and turns its stored bytes into a
//!    `data:image/png;base64,…` string.
//! 2. **Fill questions** — writes those strings, in order, into the empty
//!    `img` fields of a JSON array of question objects.
//! 3. **Load an allow-list** — reads a text file of question IDs, one per line.
//! 4. **Filter questions** — keeps only the question objects whose `id` is on
//!    the allow-list, preserving order and content.
//!
//! ## Quick example
//!
//! ```no_run
//! use question_assets::{PdfImageExtractor, LEADING_IMAGES_SKIPPED};
//! use question_assets::questions::{fill_images_in_json, DEFAULT_FILLED_OUTPUT};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = PdfImageExtractor::from_path("exam.pdf")?;
//! let images: Vec<String> = extractor
//!     .extract_data_uris()?
//!     .into_iter()
//!     .skip(LEADING_IMAGES_SKIPPED)
//!     .collect();
//!
//! let summary = fill_images_in_json("questions.json", &images, DEFAULT_FILLED_OUTPUT)?;
//! println!("filled {} of {} question(s)", summary.filled, summary.total);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod extractor;
mod image_discovery;
mod images;
mod pdf_utils;

pub mod filter;
pub mod id_set;
pub mod logging;
pub mod questions;

pub use extractor::PdfImageExtractor;
pub use images::{ExtractedImage, ImageFormat, PNG_DATA_URI_PREFIX};

/// Number of leading extracted images that never reach the question filler.
///
/// The first three images of the source exams are cover and logo artwork.
pub const LEADING_IMAGES_SKIPPED: usize = 3;

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`PdfImageExtractor`].
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// If set, [`PdfImageExtractor::extract_images`] returns
    /// [`Error::ImageTooLarge`] as soon as any single image stream exceeds
    /// this byte count.
    pub max_image_size: Option<usize>,

    /// When `true`, images drawn inside form XObjects are listed together with
    /// the page's own images.
    pub include_form_images: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_image_size: None,
            include_form_images: true,
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum Error {
    /// A filesystem I/O error on a known path.
    #[error("I/O error on '{}': {source}", .path.display())]
    PathIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying lopdf parser returned an error.
    #[error("PDF parse error: {0}")]
    ParseError(#[from] lopdf::Error),

    /// The input was not valid JSON, or the output could not be serialised.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The JSON document parsed, but its top level is not an array.
    #[error("expected a JSON array at the top level, found {0}")]
    NotAnArray(&'static str),

    /// An image stream exceeds the configured `max_image_size` limit.
    #[error("image {id:?} is {size} bytes, over the configured limit of {limit}")]
    ImageTooLarge {
        id: lopdf::ObjectId,
        size: usize,
        limit: usize,
    },
}

impl Error {
    pub(crate) fn at_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::PathIo {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
