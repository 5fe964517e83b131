// Upload payload: builds the JSON body the storage service expects for
// a new image file. The file is read fully into memory and embedded as
// base64 text in the `data` field.

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine};
use serde::Serialize;

/// Value of the `type` field for every upload sent by this tool.
pub const IMAGE_TYPE: &str = "image";

/// Request body for `POST /files`. Field order matches the wire format.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_public: bool,
    pub data: String,
    pub parent_id: String,
}

impl UploadRequest {
    /// Build an image upload. `type` and `isPublic` are fixed.
    pub fn new(
        name: impl Into<String>,
        data: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        UploadRequest {
            name: name.into(),
            kind: IMAGE_TYPE.to_string(),
            is_public: true,
            data: data.into(),
            parent_id: parent_id.into(),
        }
    }

    /// Read `file_path` and build the request from its bytes. The name is
    /// the last `/`-separated segment of the path as given.
    pub fn from_file(file_path: &str, parent_id: &str) -> Result<Self> {
        let bytes = std::fs::read(file_path)
            .with_context(|| format!("Failed to read file {}", file_path))?;
        let name = file_name_from_path(file_path);
        log::debug!("Read {} bytes from {}", bytes.len(), file_path);
        Ok(UploadRequest::new(name, encode_data(&bytes), parent_id))
    }
}

/// Everything after the last `/`. No other separators or normalization,
/// so a trailing `/` gives an empty name.
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Standard padded base64.
pub fn encode_data(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_temp_file(dir: &TempDir, filename: &str, data: &[u8]) -> PathBuf {
        let file_path = dir.path().join(filename);
        std::fs::write(&file_path, data).expect("write failed");
        file_path
    }

    #[test]
    fn name_is_last_segment() {
        assert_eq!(file_name_from_path("/tmp/photos/sunset.jpg"), "sunset.jpg");
        assert_eq!(file_name_from_path("photos/cat.png"), "cat.png");
    }

    #[test]
    fn name_without_slash_is_whole_path() {
        assert_eq!(file_name_from_path("cat.png"), "cat.png");
        assert_eq!(file_name_from_path(""), "");
    }

    #[test]
    fn name_is_not_normalized() {
        assert_eq!(file_name_from_path("photos/"), "");
        assert_eq!(file_name_from_path("C:\\photos\\cat.png"), "C:\\photos\\cat.png");
        assert_eq!(file_name_from_path("a/b\\c.png"), "b\\c.png");
    }

    #[test]
    fn data_decodes_to_original_bytes() {
        let bytes: Vec<u8> = (0..=255u8).chain([0, 0xff, 0x10]).collect();
        let encoded = encode_data(&bytes);
        let decoded = general_purpose::STANDARD.decode(encoded).expect("valid base64");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn constant_fields_are_fixed() {
        let req = UploadRequest::new("notes.txt", "", "");
        assert_eq!(req.kind, "image");
        assert!(req.is_public);
    }

    #[test]
    fn serializes_in_wire_shape() {
        let req = UploadRequest::new("cat.png", encode_data(&[0x89, 0x50, 0x4E, 0x47]), "5f1e");
        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(
            body,
            concat!(
                r#"{"name":"cat.png","type":"image","isPublic":true,"#,
                r#""data":"iVBORw==","parentId":"5f1e"}"#
            )
        );
    }

    #[test]
    fn from_file_reads_and_encodes() {
        let dir = TempDir::new().unwrap();
        let path = write_temp_file(&dir, "cat.png", &[0x89, 0x50, 0x4E, 0x47]);

        let req = UploadRequest::from_file(path.to_str().unwrap(), "5f1e").unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "name": "cat.png",
                "type": "image",
                "isPublic": true,
                "data": "iVBORw==",
                "parentId": "5f1e"
            })
        );
    }

    #[test]
    fn from_file_keeps_parent_id_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = write_temp_file(&dir, "a.bin", b"x");

        let req = UploadRequest::from_file(path.to_str().unwrap(), " 0 / odd id ").unwrap();
        assert_eq!(req.parent_id, " 0 / odd id ");
    }

    #[test]
    fn from_file_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.png");

        let err = UploadRequest::from_file(missing.to_str().unwrap(), "1").unwrap_err();
        assert!(err.to_string().contains("nope.png"));
    }
}
