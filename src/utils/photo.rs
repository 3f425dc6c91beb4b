//! Photo attachment encoding.
//!
//! The store keeps photos as an opaque base64 blob. Encoding failures are
//! swallowed: an event is always creatable without its photo.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::ui::messages::warning;

/// Read a file and return its base64 encoding, or an empty string when the
/// file cannot be read. The empty string is the stored form of "no photo".
pub fn encode_photo(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => STANDARD.encode(bytes),
        Err(e) => {
            warning(format!(
                "Could not read photo '{}' ({}), continuing without it",
                path.display(),
                e
            ));
            String::new()
        }
    }
}
