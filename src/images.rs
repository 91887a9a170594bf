use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lopdf::ObjectId;

/// Prefix of every data URI produced by this crate.
///
/// The MIME tag is fixed: JPEG and other encodings are labelled `image/png`
/// too, and browsers sniff the real format from the payload.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

// ── ImageFormat ──────────────────────────────────────────────────────────────

/// Encoding of an image stream, inferred from its `/Filter` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// `/DCTDecode`
    Jpeg,
    /// `/JPXDecode`
    Jpeg2000,
    /// `/JBIG2Decode`
    Jbig2,
    /// `/CCITTFaxDecode`
    CcittFax,
    /// `/FlateDecode` sample data
    Flate,
    /// No filter: uncompressed samples
    Raw,
    /// Any other filter chain
    Other,
}

impl ImageFormat {
    /// Infer the format from a filter chain; the last filter decides.
    ///
    /// ```
    /// # use question_assets::ImageFormat;
    /// assert_eq!(ImageFormat::from_filters(&[b"FlateDecode".as_slice(), b"DCTDecode".as_slice()]), ImageFormat::Jpeg);
    /// assert_eq!(ImageFormat::from_filters(&[]), ImageFormat::Raw);
    /// ```
    pub fn from_filters(filters: &[&[u8]]) -> Self {
        match filters.last().copied() {
            None => ImageFormat::Raw,
            Some(b"DCTDecode" | b"DCT") => ImageFormat::Jpeg,
            Some(b"JPXDecode") => ImageFormat::Jpeg2000,
            Some(b"JBIG2Decode") => ImageFormat::Jbig2,
            Some(b"CCITTFaxDecode" | b"CCF") => ImageFormat::CcittFax,
            Some(b"FlateDecode" | b"Fl") => ImageFormat::Flate,
            Some(_) => ImageFormat::Other,
        }
    }

    /// Returns `true` when the stored bytes form a file a browser can show
    /// on its own, whatever MIME tag the data URI carries.
    ///
    /// ```
    /// # use question_assets::ImageFormat;
    /// assert!(ImageFormat::Jpeg.is_browser_renderable());
    /// assert!(!ImageFormat::Flate.is_browser_renderable());
    /// ```
    pub fn is_browser_renderable(self) -> bool {
        matches!(self, ImageFormat::Jpeg | ImageFormat::Jpeg2000)
    }

    /// Short lowercase label used in log output.
    pub fn label(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Jpeg2000 => "jpx",
            ImageFormat::Jbig2 => "jbig2",
            ImageFormat::CcittFax => "ccitt",
            ImageFormat::Flate => "flate",
            ImageFormat::Raw => "raw",
            ImageFormat::Other => "other",
        }
    }
}

// ── ExtractedImage ───────────────────────────────────────────────────────────

/// An image XObject read out of a PDF page.
///
/// Returned by [`crate::PdfImageExtractor::extract_images`].
#[derive(Debug, Clone)]
pub struct ExtractedImage {
    /// 1-based page number the image was found on.
    pub page: u32,

    /// Cross-reference id of the image stream.
    pub id: ObjectId,

    /// The stream bytes exactly as stored in the file (still encoded).
    pub data: Vec<u8>,

    /// Encoding inferred from the stream's `/Filter`.
    pub format: ImageFormat,
}

impl ExtractedImage {
    /// Base64-encode the stored bytes behind the fixed PNG data-URI prefix.
    ///
    /// ```
    /// # use question_assets::{ExtractedImage, ImageFormat};
    /// let img = ExtractedImage { page: 1, id: (7, 0), data: b"hi".to_vec(), format: ImageFormat::Raw };
    /// assert_eq!(img.to_data_uri(), "data:image/png;base64,aGk=");
    /// ```
    pub fn to_data_uri(&self) -> String {
        let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + self.data.len() * 4 / 3 + 4);
        uri.push_str(PNG_DATA_URI_PREFIX);
        STANDARD.encode_string(&self.data, &mut uri);
        uri
    }

    /// Consume the record, keeping only its data URI.
    pub fn into_data_uri(self) -> String {
        self.to_data_uri()
    }
}
