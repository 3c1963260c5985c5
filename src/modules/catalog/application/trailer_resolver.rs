use std::sync::Arc;

use crate::modules::catalog::domain::{CatalogApi, Video};
use crate::shared::domain::MediaType;

use super::worker_pool::WorkerPool;

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// First YouTube trailer or teaser, in provider order
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|video| {
        video.site.eq_ignore_ascii_case("YouTube")
            && (video.video_type.eq_ignore_ascii_case("Trailer")
                || video.video_type.eq_ignore_ascii_case("Teaser"))
            && !video.key.trim().is_empty()
    })
}

pub fn trailer_url(key: &str) -> String {
    format!("{}{}", YOUTUBE_WATCH_URL, key)
}

/// Picks a playable trailer URL for a title
#[derive(Clone)]
pub struct TrailerResolver {
    api: Arc<dyn CatalogApi>,
    pool: WorkerPool,
}

impl TrailerResolver {
    pub fn new(api: Arc<dyn CatalogApi>, pool: WorkerPool) -> Self {
        Self { api, pool }
    }

    /// Never fails: any provider problem reads as "no trailer"
    pub async fn resolve_trailer(&self, content_id: u64, media_type: MediaType) -> Option<String> {
        let listing = match self
            .pool
            .run("videos", self.api.videos(media_type, content_id))
            .await
        {
            Ok(listing) => listing,
            Err(e) => {
                log::warn!(
                    "Trailer lookup failed for {} {}: {}",
                    media_type,
                    content_id,
                    e
                );
                return None;
            }
        };

        if let Some(listed_id) = listing.id {
            if listed_id != content_id {
                log::warn!(
                    "Video listing for {} {} belongs to {}; ignoring",
                    media_type,
                    content_id,
                    listed_id
                );
                return None;
            }
        }

        let url = select_trailer(&listing.results).map(|video| trailer_url(&video.key));
        log::debug!(
            "Trailer for {} {}: {}",
            media_type,
            content_id,
            url.as_deref().unwrap_or("none")
        );
        url
    }
}
