//! Content sniffing for string values.
//!
//! Short strings are shown as literals. Long strings are probed as base64 image
//! data against every candidate format at once; the first probe to succeed decides
//! the classification and the remaining probes are left to finish unobserved.

use std::fmt;
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use inspector_logging::{inspector_debug, inspector_warn};

/// Strings shorter than this (in characters) are always literals.
pub const SHORT_LITERAL_LIMIT: usize = 120;

/// Image formats probed for long strings.
pub const CANDIDATE_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// MIME subtype, also used as the file extension.
    pub fn subtype(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }

    pub fn mime_type(self) -> String {
        format!("image/{}", self.subtype())
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subtype())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{format} probe failed: {reason}")]
pub struct ProbeError {
    pub format: ImageFormat,
    pub reason: String,
}

impl ProbeError {
    pub fn new(format: ImageFormat, reason: impl Into<String>) -> Self {
        Self {
            format,
            reason: reason.into(),
        }
    }
}

/// Decodes base64 data as one specific image format.
pub trait ImageProbe: Send + Sync + 'static {
    fn probe(&self, base64_data: &str, format: ImageFormat) -> Result<ImageDimensions, ProbeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedString {
    /// Escaped as a string literal, without the surrounding quotes.
    ShortLiteral(String),
    LongBlock(String),
    ImagePayload {
        data: String,
        format: ImageFormat,
        width: u32,
        height: u32,
    },
}

#[derive(Clone)]
pub struct ContentClassifier {
    probe: Arc<dyn ImageProbe>,
}

impl ContentClassifier {
    pub fn new(probe: Arc<dyn ImageProbe>) -> Self {
        Self { probe }
    }

    pub fn classify(&self, text: &str) -> ClassifiedString {
        if text.chars().count() < SHORT_LITERAL_LIMIT {
            return ClassifiedString::ShortLiteral(escape_literal(text));
        }

        match self.first_decoded_format(text) {
            Some((format, dims)) => ClassifiedString::ImagePayload {
                data: text.to_string(),
                format,
                width: dims.width,
                height: dims.height,
            },
            None => ClassifiedString::LongBlock(text.to_string()),
        }
    }

    /// Races one probe per candidate format. Returns the first success, or `None`
    /// once every probe has failed.
    fn first_decoded_format(&self, text: &str) -> Option<(ImageFormat, ImageDimensions)> {
        self.race_formats(text, |name, job| {
            thread::Builder::new().name(name).spawn(job).map(drop)
        })
    }

    /// A format whose job cannot be spawned is probed inline instead.
    fn race_formats<S>(&self, text: &str, spawn: S) -> Option<(ImageFormat, ImageDimensions)>
    where
        S: Fn(String, ProbeJob) -> io::Result<()>,
    {
        let data: Arc<str> = Arc::from(text);
        let (tx, rx) = mpsc::channel();

        for format in CANDIDATE_FORMATS {
            let job: ProbeJob = {
                let probe = self.probe.clone();
                let data = data.clone();
                let tx = tx.clone();
                Box::new(move || {
                    let outcome = probe.probe(&data, format);
                    // The receiver is gone once another format has won.
                    let _ = tx.send((format, outcome));
                })
            };
            if let Err(err) = spawn(format!("image-{format}"), job) {
                inspector_warn!("cannot start {format} decoder thread, decoding inline: {err}");
                let _ = tx.send((format, self.probe.probe(&data, format)));
            }
        }
        drop(tx);

        for (format, outcome) in rx {
            match outcome {
                Ok(dims) => return Some((format, dims)),
                Err(err) => inspector_debug!("{err}"),
            }
        }
        None
    }
}

type ProbeJob = Box<dyn FnOnce() + Send + 'static>;

impl fmt::Debug for ContentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentClassifier").finish_non_exhaustive()
    }
}

/// Escapes `text` the way a JSON string literal would, minus the quotes.
pub fn escape_literal(text: &str) -> String {
    let quoted = serde_json::Value::String(text.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}
