/// In-memory catalog provider with latency and failure injection
///
/// Configure with the builder methods, then share behind an `Arc`. Missing
/// records come back as `NotFound`, injected failures as `ProviderUnavailable`.
use async_trait::async_trait;
use showcase_lib::modules::catalog::domain::{
    CatalogApi, Credits, DetailedMovie, DetailedTvShow, DiscoverTvQuery, Movie, SimilarSet,
    TvShow, Video, VideoListing,
};
use showcase_lib::shared::application::{PageRequest, PaginatedResult};
use showcase_lib::shared::domain::{CatalogProvider, MediaType};
use showcase_lib::shared::errors::{AppError, AppResult};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    PopularMovies,
    TrendingMovies,
    SearchMovies,
    MovieDetails,
    MovieCredits,
    MovieSimilar,
    DiscoverTv,
    TrendingTv,
    SearchTv,
    TvDetails,
    TvCredits,
    TvSimilar,
    Videos,
    PersonIds,
}

#[derive(Default)]
pub struct FakeCatalog {
    movies: Vec<Movie>,
    shows: Vec<TvShow>,
    movie_details: HashMap<u64, DetailedMovie>,
    tv_details: HashMap<u64, DetailedTvShow>,
    movie_credits: HashMap<u64, Credits>,
    tv_credits: HashMap<u64, Credits>,
    videos: HashMap<(MediaType, u64), Vec<Video>>,
    person_ids: HashMap<u64, String>,
    person_delays: HashMap<u64, Duration>,
    failing_people: HashSet<u64>,
    failing_endpoints: HashSet<Endpoint>,
    latency: Option<Duration>,

    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    calls: Mutex<HashMap<Endpoint, usize>>,
    discover_queries: Mutex<Vec<DiscoverTvQuery>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(mut self, movies: Vec<Movie>) -> Self {
        self.movies = movies;
        self
    }

    /// TV listing served by discover, trending and search alike
    pub fn with_shows(mut self, shows: Vec<TvShow>) -> Self {
        self.shows = shows;
        self
    }

    pub fn with_movie_detail(mut self, movie: DetailedMovie) -> Self {
        self.movie_details.insert(movie.id, movie);
        self
    }

    /// Serve `record` when `requested` is asked for
    pub fn with_movie_detail_at(mut self, requested: u64, movie: DetailedMovie) -> Self {
        self.movie_details.insert(requested, movie);
        self
    }

    pub fn with_tv_detail(mut self, show: DetailedTvShow) -> Self {
        self.tv_details.insert(show.id, show);
        self
    }

    pub fn with_movie_credits(mut self, id: u64, credits: Credits) -> Self {
        self.movie_credits.insert(id, credits);
        self
    }

    pub fn with_tv_credits(mut self, id: u64, credits: Credits) -> Self {
        self.tv_credits.insert(id, credits);
        self
    }

    pub fn with_videos(mut self, media_type: MediaType, id: u64, videos: Vec<Video>) -> Self {
        self.videos.insert((media_type, id), videos);
        self
    }

    pub fn with_person(mut self, person_id: u64, imdb_id: &str) -> Self {
        self.person_ids.insert(person_id, imdb_id.to_string());
        self
    }

    pub fn with_person_delay(mut self, person_id: u64, delay: Duration) -> Self {
        self.person_delays.insert(person_id, delay);
        self
    }

    pub fn with_failing_person(mut self, person_id: u64) -> Self {
        self.failing_people.insert(person_id);
        self
    }

    pub fn with_failing(mut self, endpoint: Endpoint) -> Self {
        self.failing_endpoints.insert(endpoint);
        self
    }

    /// Fixed latency added to every call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&endpoint)
            .copied()
            .unwrap_or(0)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub fn discover_queries(&self) -> Vec<DiscoverTvQuery> {
        self.discover_queries.lock().unwrap().clone()
    }

    async fn enter(&self, endpoint: Endpoint, extra_delay: Option<Duration>) -> AppResult<()> {
        *self.calls.lock().unwrap().entry(endpoint).or_insert(0) += 1;

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(delay) = extra_delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_endpoints.contains(&endpoint) {
            return Err(AppError::ProviderUnavailable(format!(
                "injected failure on {:?}",
                endpoint
            )));
        }
        Ok(())
    }

    fn page<T: Clone>(results: &[T]) -> PaginatedResult<T> {
        PaginatedResult {
            page: 1,
            results: results.to_vec(),
            total_pages: 1,
            total_results: results.len() as u32,
        }
    }

    fn missing(what: &str, id: u64) -> AppError {
        AppError::NotFound(format!("{} {}", what, id))
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    fn provider(&self) -> CatalogProvider {
        CatalogProvider::Tmdb
    }

    async fn popular_movies(&self, _page: PageRequest) -> AppResult<PaginatedResult<Movie>> {
        self.enter(Endpoint::PopularMovies, None).await?;
        Ok(Self::page(&self.movies))
    }

    async fn trending_movies(&self, _page: PageRequest) -> AppResult<PaginatedResult<Movie>> {
        self.enter(Endpoint::TrendingMovies, None).await?;
        Ok(Self::page(&self.movies))
    }

    async fn search_movies(
        &self,
        _query: &str,
        _page: PageRequest,
    ) -> AppResult<PaginatedResult<Movie>> {
        self.enter(Endpoint::SearchMovies, None).await?;
        Ok(Self::page(&self.movies))
    }

    async fn movie_details(&self, id: u64) -> AppResult<DetailedMovie> {
        self.enter(Endpoint::MovieDetails, None).await?;
        self.movie_details
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::missing("movie", id))
    }

    async fn movie_credits(&self, id: u64) -> AppResult<Credits> {
        self.enter(Endpoint::MovieCredits, None).await?;
        self.movie_credits
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::missing("movie credits", id))
    }

    async fn movie_similar(&self, _id: u64) -> AppResult<SimilarSet> {
        self.enter(Endpoint::MovieSimilar, None).await?;
        Ok(SimilarSet::default())
    }

    async fn discover_tv(&self, query: &DiscoverTvQuery) -> AppResult<PaginatedResult<TvShow>> {
        self.discover_queries.lock().unwrap().push(query.clone());
        self.enter(Endpoint::DiscoverTv, None).await?;
        Ok(Self::page(&self.shows))
    }

    async fn trending_tv(&self, _page: PageRequest) -> AppResult<PaginatedResult<TvShow>> {
        self.enter(Endpoint::TrendingTv, None).await?;
        Ok(Self::page(&self.shows))
    }

    async fn search_tv(
        &self,
        _query: &str,
        _page: PageRequest,
    ) -> AppResult<PaginatedResult<TvShow>> {
        self.enter(Endpoint::SearchTv, None).await?;
        Ok(Self::page(&self.shows))
    }

    async fn tv_details(&self, id: u64) -> AppResult<DetailedTvShow> {
        self.enter(Endpoint::TvDetails, None).await?;
        self.tv_details
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::missing("tv show", id))
    }

    async fn tv_credits(&self, id: u64) -> AppResult<Credits> {
        self.enter(Endpoint::TvCredits, None).await?;
        self.tv_credits
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::missing("tv credits", id))
    }

    async fn tv_similar(&self, _id: u64) -> AppResult<SimilarSet> {
        self.enter(Endpoint::TvSimilar, None).await?;
        Ok(SimilarSet::default())
    }

    async fn videos(&self, media_type: MediaType, id: u64) -> AppResult<VideoListing> {
        self.enter(Endpoint::Videos, None).await?;
        Ok(VideoListing {
            id: Some(id),
            results: self
                .videos
                .get(&(media_type, id))
                .cloned()
                .unwrap_or_default(),
        })
    }

    async fn person_imdb_id(&self, person_id: u64) -> AppResult<Option<String>> {
        let delay = self.person_delays.get(&person_id).copied();
        self.enter(Endpoint::PersonIds, delay).await?;
        if self.failing_people.contains(&person_id) {
            return Err(AppError::SerializationError(format!(
                "malformed external ids for person {}",
                person_id
            )));
        }
        Ok(self.person_ids.get(&person_id).cloned())
    }
}
