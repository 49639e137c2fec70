// SPDX-License-Identifier: MPL-2.0
//! Save-to-disk for image downloads.
//!
//! The file name suggested in the save dialog is derived from the uploader's
//! name, with the extension taken from the image URL.

use crate::error::Result;
use crate::infrastructure::http;
use futures_util::StreamExt;
use reqwest::Url;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Stem used when the uploader name has no usable characters.
const FALLBACK_STEM: &str = "image";

/// Longest extension accepted from a URL.
const MAX_EXTENSION_LEN: usize = 5;

const FORBIDDEN: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Builds a safe file name from the uploader's name and the image URL.
///
/// ```
/// use iced_gallery::infrastructure::download::suggested_file_name;
///
/// assert_eq!(
///     suggested_file_name("Josch13", "https://cdn.example/flower_150.jpg"),
///     "Josch13.jpg"
/// );
/// assert_eq!(suggested_file_name("a/b", "https://cdn.example/x"), "a_b");
/// assert_eq!(suggested_file_name("  ", "https://cdn.example/x.png"), "image.png");
/// ```
#[must_use]
pub fn suggested_file_name(uploader: &str, url: &str) -> String {
    let sanitized: String = uploader
        .chars()
        .map(|c| {
            if c.is_control() || FORBIDDEN.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    let stem = sanitized.trim().trim_matches('.');
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };

    match extension_from_url(url) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    }
}

/// Returns the lower-cased extension of the URL's last path segment.
#[must_use]
pub fn extension_from_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    let segment = url.path_segments()?.next_back()?;
    let (_, ext) = segment.rsplit_once('.')?;

    let valid = !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}

/// Prepares the native save dialog.
#[must_use]
pub fn save_dialog(file_name: &str, start_dir: Option<&Path>) -> rfd::AsyncFileDialog {
    let dialog = rfd::AsyncFileDialog::new()
        .set_title("Save Image As")
        .set_file_name(file_name);

    match start_dir {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}

/// Streams `url` into `destination`.
///
/// Returns the number of bytes written. A partially written file is removed
/// when the transfer fails.
pub async fn download_to(url: &str, destination: &Path) -> Result<u64> {
    let response = http::get(url).await?;

    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(destination)?;

    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();
    let outcome: Result<()> = async {
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
            written += chunk.len() as u64;
        }
        file.flush()?;
        Ok(())
    }
    .await;

    if let Err(err) = outcome {
        drop(file);
        let _ = std::fs::remove_file(destination);
        return Err(err);
    }

    tracing::info!(path = %destination.display(), bytes = written, "image downloaded");
    Ok(written)
}

/// Result of a completed download, as reported back to the UI.
#[derive(Debug, Clone)]
pub struct SavedImage {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Shows the save dialog, then downloads into the chosen path.
///
/// Returns `Ok(None)` when the user cancels the dialog.
pub async fn download_with_dialog(
    url: String,
    file_name: String,
    start_dir: Option<PathBuf>,
) -> Result<Option<SavedImage>> {
    let Some(handle) = save_dialog(&file_name, start_dir.as_deref()).save_file().await else {
        return Ok(None);
    };
    let path = handle.path().to_path_buf();
    let bytes = download_to(&url, &path).await?;
    Ok(Some(SavedImage { path, bytes }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn uploader_name_keeps_unicode() {
        assert_eq!(
            suggested_file_name("Zoë Müller", "https://cdn.example/p.JPG"),
            "Zoë Müller.jpg"
        );
    }

    #[test]
    fn forbidden_and_control_characters_are_replaced() {
        assert_eq!(
            suggested_file_name("a\\b:c*d?\"e<f>g|h\n", "https://cdn.example/x"),
            "a_b_c_d__e_f_g_h_"
        );
    }

    #[test]
    fn dot_only_names_fall_back() {
        assert_eq!(suggested_file_name("..", "https://cdn.example/x.webp"), "image.webp");
    }

    #[test]
    fn extension_ignores_query_string() {
        assert_eq!(
            extension_from_url("https://cdn.example/a/b/photo.png?w=640#top").as_deref(),
            Some("png")
        );
    }

    #[test]
    fn extension_rejects_odd_suffixes() {
        assert_eq!(extension_from_url("https://cdn.example/file.tar-gz"), None);
        assert_eq!(extension_from_url("https://cdn.example/file.verylongext"), None);
        assert_eq!(extension_from_url("https://cdn.example/dir/"), None);
        assert_eq!(extension_from_url("not a url.jpg"), None);
    }

    #[tokio::test]
    async fn unreachable_host_creates_no_file() {
        let dir = tempdir().expect("temp dir");
        let destination = dir.path().join("out.jpg");

        let result = download_to("http://127.0.0.1:9/missing.jpg", &destination).await;
        assert!(matches!(result, Err(Error::Http(_))));
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn interrupted_transfer_removes_partial_file() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");

        // Announces a 4 KiB body, sends a few bytes, then hangs up.
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: 4096\r\n\r\npartial",
                )
                .await
                .expect("write response head");
            socket.flush().await.expect("flush");
        });

        let dir = tempdir().expect("temp dir");
        let destination = dir.path().join("nested").join("out.jpg");

        let result = download_to(&format!("http://{addr}/image.jpg"), &destination).await;
        server.await.expect("server task");

        assert!(matches!(result, Err(Error::Http(_))));
        assert!(dir.path().join("nested").is_dir());
        assert!(!destination.exists());
    }
}
