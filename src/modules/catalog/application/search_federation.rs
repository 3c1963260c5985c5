use crate::modules::catalog::domain::SearchAllResponse;
use crate::shared::application::PageRequest;
use crate::shared::domain::ContentKind;
use crate::shared::utils::{LogContext, TimedOperation};

use super::listing_service::ListingService;

/// Runs one query against all three content kinds at once
#[derive(Clone)]
pub struct SearchFederation {
    listings: ListingService,
}

impl SearchFederation {
    pub fn new(listings: ListingService) -> Self {
        Self { listings }
    }

    /// A failing bucket comes back empty; the other buckets are unaffected.
    /// Titles that land in more than one bucket are not de-duplicated.
    pub async fn search_all(&self, query: &str, page: PageRequest) -> SearchAllResponse {
        let timer = TimedOperation::new(&format!("search all '{}'", query));

        let (movies, tv_shows, anime_shows) = futures::join!(
            self.listings.search(ContentKind::Movie, query, page),
            self.listings.search(ContentKind::TvShow, query, page),
            self.listings.search(ContentKind::Anime, query, page),
        );

        let response = SearchAllResponse::new(movies, tv_shows, anime_shows);
        LogContext::search_operation(query, None, Some(response.all_results.len()));
        timer.finish_with_info(&format!(
            "{} movies, {} tv, {} anime",
            response.movies.len(),
            response.tv_shows.len(),
            response.anime_shows.len()
        ));
        response
    }
}
