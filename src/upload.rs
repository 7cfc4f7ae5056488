//! Image upload contract.
//!
//! Validates an uploaded file and hands the bytes to an [`ImageStore`]
//! collaborator. The rules mirror the hosting site's upload handler:
//! 5 MiB limit, image types only (jpeg, png, gif, webp — sniffed from the
//! bytes, never trusted from the filename), and categorized storage under
//! `/uploads/<category>/`.
//!
//! Stored files are content-addressed: the id (and filename stem) is the
//! SHA-256 hash of the bytes, so re-uploading the same image lands on the
//! same path instead of accumulating copies.

use chrono::{DateTime, Utc};
use image::ImageFormat;
use log::info;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Upload size limit, matching the site's handler.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Hex characters of the content hash used for ids and filenames.
const ID_LEN: usize = 16;

pub const DEFAULT_CATEGORY: &str = "uncategorized";
pub const DEFAULT_SUBCATEGORY: &str = "all";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("no file uploaded")]
    NoFile,
    #[error("error uploading file: {0}")]
    UploadFailed(String),
    #[error("file size {size} exceeds the {MAX_UPLOAD_BYTES} byte limit")]
    TooLarge { size: usize },
    #[error("invalid file type; allowed: jpeg, png, gif, webp")]
    InvalidType,
}

/// A pending upload: the file plus its category tags.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub name: String,
    pub bytes: Vec<u8>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// Successful upload result, as returned to the admin gallery widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub id: String,
    /// Original filename as submitted.
    pub name: String,
    /// Public path, `/uploads/<category>/<id>.<ext>`.
    pub path: String,
    pub category: String,
    pub subcategory: String,
    pub size: usize,
    pub content_type: String,
    pub date: DateTime<Utc>,
}

/// Storage collaborator. `filename` is relative to the category directory.
pub trait ImageStore {
    fn store(&mut self, category: &str, filename: &str, bytes: &[u8])
    -> Result<(), UploadError>;
}

/// Validate and store one upload.
pub fn process_upload(
    request: UploadRequest,
    store: &mut dyn ImageStore,
) -> Result<UploadedImage, UploadError> {
    if request.bytes.is_empty() {
        return Err(UploadError::NoFile);
    }
    let size = request.bytes.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge { size });
    }

    let format = image::guess_format(&request.bytes).map_err(|_| UploadError::InvalidType)?;
    if !matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif | ImageFormat::WebP
    ) {
        return Err(UploadError::InvalidType);
    }

    let category = request
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    let subcategory = request
        .subcategory
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SUBCATEGORY.to_string());

    let id = content_id(&request.bytes);
    let ext = format.extensions_str()[0];
    let filename = format!("{id}.{ext}");
    store.store(&category, &filename, &request.bytes)?;

    info!("stored upload '{}' as /uploads/{category}/{filename}", request.name);
    Ok(UploadedImage {
        path: format!("/uploads/{category}/{filename}"),
        id,
        name: request.name,
        category,
        subcategory,
        size,
        content_type: format.to_mime_type().to_string(),
        date: Utc::now(),
    })
}

/// Content-addressed id: truncated hex SHA-256 of the file bytes.
fn content_id(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut id = String::with_capacity(ID_LEN);
    for byte in digest.iter().take(ID_LEN / 2) {
        id.push_str(&format!("{byte:02x}"));
    }
    id
}

/// Filesystem-backed store writing under a root directory.
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsImageStore { root: root.into() }
    }

    /// All stored files, as paths relative to the root.
    pub fn list(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .map(Path::to_path_buf)
                    .ok()
            })
            .collect();
        files.sort();
        files
    }
}

impl ImageStore for FsImageStore {
    fn store(
        &mut self,
        category: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<(), UploadError> {
        let dir = self.root.join(category);
        fs::create_dir_all(&dir).map_err(|e| UploadError::UploadFailed(e.to_string()))?;
        fs::write(dir.join(filename), bytes)
            .map_err(|e| UploadError::UploadFailed(e.to_string()))?;
        Ok(())
    }
}

/// Subcategories the admin upload form offers per category.
pub fn subcategories(category: &str) -> &'static [&'static str] {
    match category {
        "properties" => &["Green Terrace", "Forest Villas", "Corner Building"],
        "gallery" => &["Exteriors", "Interiors", "Construction"],
        "team" => &["Management", "Staff", "Partners"],
        "slider" => &["Home", "About", "Projects"],
        "testimonials" => &["Clients"],
        _ => &[],
    }
}

/// URL-safe form of a subcategory name: lowercased, spaces to dashes.
pub fn subcategory_slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}
