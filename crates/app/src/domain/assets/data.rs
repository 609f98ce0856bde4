//! Assets Data

/// An image received from a client, ready to hand to the asset host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, when the client sent one.
    pub file_name: Option<String>,

    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

/// A hosted image, as reported back by the asset host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Public URL of the hosted image.
    pub url: String,
}
