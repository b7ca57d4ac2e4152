//! Async image loading
//!
//! Resolves row `image_url`s into egui textures: bytes are fetched on a
//! background runtime, cached on disk, decoded off-thread, and handed
//! back to the UI thread over a channel. Completions are applied only if
//! the requesting cell is still bound to the same row (stale guard).

use crate::constants::IMAGE_CACHE_SUBDIR;
use crate::row::Row;
use crate::section::Section;
use crate::types::IndexPath;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Result of one background fetch. `image` is `None` when the fetch or
/// decode failed; the URL is then blacklisted instead of retried.
pub struct ImageCompletion {
    pub url: String,
    pub index_path: IndexPath,
    pub image: Option<egui::ColorImage>,
}

pub struct ImageLoader {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
    semaphore: Arc<tokio::sync::Semaphore>,
    cache_dir: PathBuf,
    tx: Sender<ImageCompletion>,
    rx: Receiver<ImageCompletion>,
    textures: HashMap<String, egui::TextureHandle>,
    failed: HashSet<String>,
    in_flight: HashMap<String, (IndexPath, CancellationToken)>,
}

impl ImageLoader {
    pub fn new(max_concurrent: usize) -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(IMAGE_CACHE_SUBDIR);
        Self::with_cache_dir(max_concurrent, cache_dir)
    }

    pub fn with_cache_dir(max_concurrent: usize, cache_dir: PathBuf) -> Self {
        std::fs::create_dir_all(&cache_dir).ok();
        let (tx, rx) = channel();
        Self {
            runtime: tokio::runtime::Runtime::new().unwrap(),
            client: reqwest::Client::new(),
            semaphore: Arc::new(tokio::sync::Semaphore::new(max_concurrent)),
            cache_dir,
            tx,
            rx,
            textures: HashMap::new(),
            failed: HashSet::new(),
            in_flight: HashMap::new(),
        }
    }

    /// Texture for a URL, if a fetch already resolved it.
    pub fn texture(&self, url: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(url)
    }

    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }

    fn cache_path(&self, url: &str) -> PathBuf {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        url.hash(&mut hasher);
        self.cache_dir.join(format!("{:016x}.img", hasher.finish()))
    }

    /// Requests the image for a row binding. No-op when the texture is
    /// already resolved, the URL previously failed, or a fetch is in
    /// flight (the in-flight record is retargeted to the new binding).
    pub fn request(&mut self, ctx: &egui::Context, url: &str, index_path: IndexPath) {
        if self.textures.contains_key(url) || self.failed.contains(url) {
            return;
        }
        if let Some(entry) = self.in_flight.get_mut(url) {
            entry.0 = index_path;
            return;
        }

        // Disk cache: decode synchronously, same as a resolved fetch.
        let cache_path = self.cache_path(url);
        if cache_path.exists() {
            match std::fs::read(&cache_path) {
                Ok(bytes) => {
                    match decode(&bytes) {
                        Some(image) => {
                            let texture =
                                ctx.load_texture(url, image, egui::TextureOptions::LINEAR);
                            self.textures.insert(url.to_string(), texture);
                        }
                        None => {
                            // Corrupt cache entry; refetch next frame.
                            std::fs::remove_file(&cache_path).ok();
                        }
                    }
                    return;
                }
                Err(e) => {
                    warn!(error = %e, path = %cache_path.display(), "Failed to read cached image");
                }
            }
        }

        let token = CancellationToken::new();
        self.in_flight
            .insert(url.to_string(), (index_path, token.clone()));

        let client = self.client.clone();
        let sem = self.semaphore.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let url = url.to_string();

        debug!(url = %url, "Starting image fetch");
        self.runtime.spawn(async move {
            let _permit = sem.acquire().await.ok();
            tokio::select! {
                _ = token.cancelled() => {}
                image = fetch_and_decode(client, url.clone(), cache_path) => {
                    tx.send(ImageCompletion { url, index_path, image }).ok();
                    ctx.request_repaint();
                }
            }
        });
    }

    /// Drains finished fetches and applies them to the rows that are
    /// still bound to them. Must run on the UI thread.
    ///
    /// Stale guard: a completion only mutates a row if the row at the
    /// recorded index path still reports the same URL. The texture is
    /// cached by URL either way, so a re-bound row picks it up on its
    /// next bind without refetching.
    pub fn apply_completed(&mut self, ctx: &egui::Context, sections: &mut [Box<dyn Section>]) {
        let completions: Vec<ImageCompletion> = self.rx.try_iter().collect();
        for completion in completions {
            self.in_flight.remove(&completion.url);

            let Some(image) = completion.image else {
                self.failed.insert(completion.url);
                continue;
            };

            let texture = ctx.load_texture(&completion.url, image, egui::TextureOptions::LINEAR);
            self.textures
                .insert(completion.url.clone(), texture.clone());

            if binding_is_current(&*sections, completion.index_path, &completion.url) {
                if let Some(row) = row_at_mut(sections, completion.index_path) {
                    row.set_resolved_image(texture);
                }
            } else {
                debug!(
                    url = %completion.url,
                    section = completion.index_path.section,
                    row = completion.index_path.row,
                    "Discarding stale image completion"
                );
            }
        }
    }

    /// Cancels fetches whose requesting binding no longer exists or no
    /// longer wants the URL.
    pub fn prune(&mut self, sections: &[Box<dyn Section>]) {
        self.in_flight.retain(|url, (index_path, token)| {
            let current = binding_is_current(sections, *index_path, url);
            if !current {
                debug!(url = %url, "Cancelling orphaned image fetch");
                token.cancel();
            }
            current
        });
    }

    #[cfg(test)]
    fn inject(&self, completion: ImageCompletion) {
        self.tx.send(completion).unwrap();
    }
}

fn row_at_mut(
    sections: &mut [Box<dyn Section>],
    index_path: IndexPath,
) -> Option<&mut dyn Row> {
    Some(
        sections
            .get_mut(index_path.section)?
            .rows_mut()
            .get_mut(index_path.row)?
            .as_mut(),
    )
}

fn binding_is_current(
    sections: &[Box<dyn Section>],
    index_path: IndexPath,
    url: &str,
) -> bool {
    sections
        .get(index_path.section)
        .and_then(|s| s.rows().get(index_path.row))
        .map(|row| row.image_url() == Some(url))
        .unwrap_or(false)
}

async fn fetch_and_decode(
    client: reqwest::Client,
    url: String,
    cache_path: PathBuf,
) -> Option<egui::ColorImage> {
    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, url = %url, "Image fetch failed");
            return None;
        }
    };
    if !response.status().is_success() {
        warn!(status = %response.status(), url = %url, "Image fetch rejected");
        return None;
    }
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, url = %url, "Image body read failed");
            return None;
        }
    };

    if let Some(parent) = cache_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(&cache_path, &bytes).ok();

    decode(&bytes)
}

fn decode(bytes: &[u8]) -> Option<egui::ColorImage> {
    match image::load_from_memory(bytes) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let pixels = rgba.into_raw();
            Some(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
        }
        Err(e) => {
            warn!(error = %e, "Failed to decode image");
            None
        }
    }
}
