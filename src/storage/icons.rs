//! Embed thumbnail icons published to the storage bucket at startup.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::AppError;
use crate::storage::StorageClient;

const ICONS_BUCKET: &str = "icons";

/// Public URLs of the two embed thumbnails.
///
/// Derived unconditionally after publishing, whatever the icons directory
/// contains; the bucket keeps serving previously uploaded icons.
#[derive(Debug, Clone)]
pub struct IconUrls {
    pub music: String,
    pub music_error: String,
}

/// Ensures the icons bucket exists and uploads every local PNG icon into it.
///
/// Bucket creation failing because the bucket already exists is the one
/// tolerated startup error; anything else aborts startup.
pub async fn publish_icons(client: &StorageClient, dir: &Path) -> Result<IconUrls, AppError> {
    match client
        .create_bucket(ICONS_BUCKET, true, &["image/png"])
        .await
    {
        Ok(()) => tracing::info!("Created storage bucket {ICONS_BUCKET}"),
        Err(e) if e.is_duplicate() => {
            tracing::debug!("Storage bucket {ICONS_BUCKET} already exists")
        }
        Err(e) => return Err(e.into()),
    }

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
    {
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        tracing::info!("Uploading {name} to storage bucket {ICONS_BUCKET}");
        let bytes = tokio::fs::read(entry.path()).await?;
        client.upload(ICONS_BUCKET, name, "image/png", bytes).await?;
    }

    Ok(IconUrls {
        music: client.public_url(ICONS_BUCKET, "music.png"),
        music_error: client.public_url(ICONS_BUCKET, "music_error.png"),
    })
}
