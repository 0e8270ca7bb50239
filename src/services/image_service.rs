use std::path::Path;

use uuid::Uuid;

use crate::error::{AppError, Result};

pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

pub fn is_accepted_image_type(content_type: &str) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&content_type)
}

/// Extension comes from the uploaded filename when it has a sane one,
/// otherwise from the declared content type.
pub fn file_extension(file_name: Option<&str>, content_type: &str) -> String {
    if let Some(name) = file_name {
        if let Some((_, ext)) = name.rsplit_once('.') {
            if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return ext.to_ascii_lowercase();
            }
        }
    }

    match content_type {
        "image/png" => "png".to_string(),
        _ => "jpg".to_string(),
    }
}

pub fn unique_filename(file_name: Option<&str>, content_type: &str) -> String {
    format!(
        "{}.{}",
        Uuid::new_v4(),
        file_extension(file_name, content_type)
    )
}

pub async fn store_file(dir: &Path, filename: &str, data: &[u8]) -> Result<()> {
    let path = dir.join(filename);

    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write {}: {}", path.display(), e)))
}

pub fn resolve_url(base_url: &str, filename: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_jpeg_and_png() {
        assert!(is_accepted_image_type("image/jpeg"));
        assert!(is_accepted_image_type("image/png"));
        assert!(!is_accepted_image_type("image/webp"));
        assert!(!is_accepted_image_type("text/plain"));
        assert!(!is_accepted_image_type("application/octet-stream"));
    }

    #[test]
    fn extension_prefers_original_filename() {
        assert_eq!(file_extension(Some("fern.PNG"), "image/jpeg"), "png");
        assert_eq!(file_extension(Some("photo.jpeg"), "image/png"), "jpeg");
    }

    #[test]
    fn extension_falls_back_to_content_type() {
        assert_eq!(file_extension(None, "image/png"), "png");
        assert_eq!(file_extension(None, "image/jpeg"), "jpg");
        assert_eq!(file_extension(Some("no-extension"), "image/png"), "png");
        assert_eq!(file_extension(Some("trailing."), "image/jpeg"), "jpg");
    }

    #[test]
    fn unique_filenames_do_not_collide() {
        let a = unique_filename(Some("plant.png"), "image/png");
        let b = unique_filename(Some("plant.png"), "image/png");
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
        assert!(Uuid::parse_str(a.trim_end_matches(".png")).is_ok());
    }

    #[test]
    fn resolve_url_handles_trailing_slash() {
        assert_eq!(
            resolve_url("https://img.example.com/", "a.png"),
            "https://img.example.com/a.png"
        );
        assert_eq!(
            resolve_url("https://img.example.com", "a.png"),
            "https://img.example.com/a.png"
        );
    }
}
