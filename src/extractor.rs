use crate::image_discovery::ImageDiscovery;
use crate::{pdf_utils, Error, ExtractedImage, ExtractorConfig, ImageFormat, Result};
use lopdf::{Document, Object, ObjectId};
use std::path::Path;
use tracing::{debug, info, warn};

// ── PdfImageExtractor ────────────────────────────────────────────────────────

/// Entry point for pulling embedded images out of a PDF.
///
/// # Creating an extractor
///
/// ```no_run
/// use question_assets::{PdfImageExtractor, ExtractorConfig};
///
/// // From a file path
/// let e = PdfImageExtractor::from_path("exam.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("exam.pdf").unwrap();
/// let e = PdfImageExtractor::from_bytes(&bytes).unwrap();
///
/// // With custom configuration
/// let cfg = ExtractorConfig {
///     max_image_size: Some(10 * 1024 * 1024),
///     ..Default::default()
/// };
/// let e = PdfImageExtractor::with_config("exam.pdf", cfg).unwrap();
/// ```
pub struct PdfImageExtractor {
    document: Document,
    config: ExtractorConfig,
}

impl PdfImageExtractor {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a PDF from the file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(path, ExtractorConfig::default())
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self {
            document: Document::load_mem(data)?,
            config: ExtractorConfig::default(),
        })
    }

    /// Load a PDF from the file system with a custom [`ExtractorConfig`].
    pub fn with_config<P: AsRef<Path>>(path: P, config: ExtractorConfig) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading PDF");
        Ok(Self {
            document: Document::load(path)?,
            config,
        })
    }

    /// Wrap a document that is already in memory.
    pub fn from_document(document: Document, config: ExtractorConfig) -> Self {
        Self { document, config }
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Number of image references across all pages, counting an image once
    /// per page it appears on.
    pub fn count_images(&self) -> usize {
        self.discovery().collect_page_images().len()
    }

    // ── Extraction ────────────────────────────────────────────────────────────

    /// Extract every image, in page order and then in position order within
    /// each page.
    ///
    /// The stored (still encoded) stream bytes are returned; nothing is
    /// decoded or transcoded. A document without images yields an empty
    /// vector. An image stream that cannot be read is logged and skipped.
    ///
    /// Returns [`Error::ImageTooLarge`] when
    /// [`ExtractorConfig::max_image_size`] is set and an image exceeds it.
    pub fn extract_images(&self) -> Result<Vec<ExtractedImage>> {
        let refs = self.discovery().collect_page_images();
        let mut results = Vec::with_capacity(refs.len());

        for (page, id) in refs {
            let image = match self.read_image(page, id) {
                Ok(image) => image,
                Err(e) => {
                    warn!(page, ?id, error = %e, "skipping unreadable image stream");
                    continue;
                }
            };

            if let Some(limit) = self.config.max_image_size {
                if image.data.len() > limit {
                    return Err(Error::ImageTooLarge {
                        id,
                        size: image.data.len(),
                        limit,
                    });
                }
            }

            debug!(
                page,
                ?id,
                format = image.format.label(),
                bytes = image.data.len(),
                "extracted image"
            );
            results.push(image);
        }

        let unrenderable = results
            .iter()
            .filter(|image| !image.format.is_browser_renderable())
            .count();
        if unrenderable > 0 {
            warn!(
                images = unrenderable,
                "image streams are not JPEG/JPX; their bytes are passed through untranscoded \
                 under the image/png tag and may not display"
            );
        }

        info!(
            pages = self.page_count(),
            images = results.len(),
            "image extraction finished"
        );
        Ok(results)
    }

    /// Extract every image as a `data:image/png;base64,…` string.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use question_assets::PdfImageExtractor;
    ///
    /// let extractor = PdfImageExtractor::from_path("exam.pdf").unwrap();
    /// for uri in extractor.extract_data_uris().unwrap() {
    ///     println!("{} chars", uri.len());
    /// }
    /// ```
    pub fn extract_data_uris(&self) -> Result<Vec<String>> {
        Ok(self
            .extract_images()?
            .into_iter()
            .map(ExtractedImage::into_data_uri)
            .collect())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns a reference to the active [`ExtractorConfig`].
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    // ── Private ───────────────────────────────────────────────────────────────

    fn discovery(&self) -> ImageDiscovery<'_> {
        ImageDiscovery::new(&self.document, self.config.include_form_images)
    }

    fn read_image(&self, page: u32, id: ObjectId) -> Result<ExtractedImage> {
        let stream = self.document.get_object(id).and_then(Object::as_stream)?;
        let format = ImageFormat::from_filters(&pdf_utils::filter_names(&self.document, &stream.dict));

        Ok(ExtractedImage {
            page,
            id,
            data: stream.content.clone(),
            format,
        })
    }
}
