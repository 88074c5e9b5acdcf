use std::sync::Arc;

use crate::blob::BlobStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        AppState { blobs }
    }
}
