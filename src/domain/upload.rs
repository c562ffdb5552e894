// SPDX-License-Identifier: MPL-2.0
//! The file a user chose for analysis.

use std::sync::Arc;

/// Binary payload and file name of the image chosen for analysis.
///
/// Cloning is cheap: the payload is shared, so handing it to an in-flight
/// request does not copy the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Arc<Vec<u8>>,
}

impl SelectedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes: Arc::new(bytes),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a shared handle to the payload.
    #[must_use]
    pub fn bytes_arc(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_payload() {
        let file = SelectedFile::new("shirt.png", vec![1, 2, 3]);
        let clone = file.clone();
        assert!(Arc::ptr_eq(&file.bytes_arc(), &clone.bytes_arc()));
        assert_eq!(clone.name(), "shirt.png");
        assert_eq!(clone.len(), 3);
    }
}
