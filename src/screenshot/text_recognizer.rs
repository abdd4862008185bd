use crate::screenshot::extraction_error::ExtractionError;

use log::debug;
use std::future::Future;

/// An engine that turns an image into text.
///
/// An engine is created for one extraction and must be terminated once it is done,
/// whether recognition succeeded or not.
pub trait TextRecognizer {
    fn recognize(
        &mut self,
        image: &[u8],
    ) -> impl Future<Output = Result<String, ExtractionError>> + Send;

    fn terminate(&mut self) -> impl Future<Output = ()> + Send;
}

/// Recognizer for screenshots that were already run through an external OCR tool:
/// the "image" bytes are the recognized UTF-8 text.
#[derive(Debug, Default)]
pub struct TranscriptRecognizer {
    terminated: bool,
}

impl TranscriptRecognizer {
    pub fn new() -> Self {
        TranscriptRecognizer::default()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl TextRecognizer for TranscriptRecognizer {
    async fn recognize(&mut self, image: &[u8]) -> Result<String, ExtractionError> {
        if self.terminated {
            return Err(ExtractionError::Recognition(
                "recognizer was already terminated".to_owned(),
            ));
        }
        String::from_utf8(image.to_vec())
            .map_err(|err| ExtractionError::Recognition(format!("transcript is not UTF-8: {}", err)))
    }

    async fn terminate(&mut self) {
        debug!("Terminating transcript recognizer");
        self.terminated = true;
    }
}
