//! Multi-stage detail aggregation
//!
//! base record -> credits + similar -> person ids + trailer -> record.
//! Only the base stage can make the whole result absent; every later stage
//! degrades to an empty block or a missing field.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::modules::catalog::domain::classifier::is_anime_strict;
use crate::modules::catalog::domain::{
    CatalogApi, Creator, Credits, DetailRecord, DetailedMovie, DetailedTvShow, SimilarSet,
};
use crate::shared::domain::{ContentKind, MediaType};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;

use super::identity_resolver::IdentityResolver;
use super::trailer_resolver::TrailerResolver;
use super::worker_pool::WorkerPool;

#[derive(Clone)]
pub struct DetailOrchestrator {
    api: Arc<dyn CatalogApi>,
    pool: WorkerPool,
    identities: IdentityResolver,
    trailers: TrailerResolver,
}

impl DetailOrchestrator {
    pub fn new(api: Arc<dyn CatalogApi>, pool: WorkerPool) -> Self {
        Self {
            identities: IdentityResolver::new(api.clone(), pool.clone()),
            trailers: TrailerResolver::new(api.clone(), pool.clone()),
            api,
            pool,
        }
    }

    pub async fn get_detail(&self, kind: ContentKind, id: u64) -> Option<DetailRecord> {
        match kind {
            ContentKind::Movie => self.get_detailed_movie_info(id).await.map(Into::into),
            ContentKind::TvShow => self.get_detailed_tv_show_info(id).await.map(Into::into),
            ContentKind::Anime => self.get_detailed_anime_info(id).await.map(Into::into),
        }
    }

    pub async fn get_detailed_movie_info(&self, id: u64) -> Option<DetailedMovie> {
        let timer = TimedOperation::new(&format!("movie detail {}", id));

        let mut movie = self
            .fetch_base("movie", id, self.api.movie_details(id))
            .await?;
        if movie.id != id {
            warn!("Movie {} came back as {}; treating as absent", id, movie.id);
            return None;
        }

        let (credits, similar) = futures::join!(
            self.pool.run("movie credits", self.api.movie_credits(id)),
            self.pool.run("movie similar", self.api.movie_similar(id)),
        );
        movie.credits = accept_credits("movie", id, credits);
        movie.similar = accept_similar("movie", id, similar);

        let (_, trailer) = futures::join!(
            self.resolve_people(movie.credits.as_mut(), Default::default()),
            self.trailers.resolve_trailer(id, MediaType::Movie),
        );
        movie.trailer_url = trailer;

        timer.finish_with_info(&summary(movie.credits.as_ref(), movie.trailer_url.is_some()));
        Some(movie)
    }

    pub async fn get_detailed_tv_show_info(&self, id: u64) -> Option<DetailedTvShow> {
        let timer = TimedOperation::new(&format!("tv detail {}", id));

        let show = self.fetch_tv_base(id).await?;
        let show = self.enrich_tv(show).await;

        timer.finish_with_info(&summary(show.credits.as_ref(), show.trailer_url.is_some()));
        Some(show)
    }

    /// TV detail that is only returned when the show classifies as anime
    pub async fn get_detailed_anime_info(&self, id: u64) -> Option<DetailedTvShow> {
        let timer = TimedOperation::new(&format!("anime detail {}", id));

        let show = self.fetch_tv_base(id).await?;
        let show = self.enrich_tv(show).await;
        if !is_anime_strict(&show) {
            let mismatch = AppError::ClassificationMismatch(format!(
                "TV show {} is not anime (language {:?})",
                id, show.original_language
            ));
            info!("{}", mismatch);
            return None;
        }

        timer.finish_with_info(&summary(show.credits.as_ref(), show.trailer_url.is_some()));
        Some(show)
    }

    async fn fetch_tv_base(&self, id: u64) -> Option<DetailedTvShow> {
        let show = self.fetch_base("tv", id, self.api.tv_details(id)).await?;
        if show.id != id {
            warn!("TV show {} came back as {}; treating as absent", id, show.id);
            return None;
        }
        Some(show)
    }

    async fn enrich_tv(&self, mut show: DetailedTvShow) -> DetailedTvShow {
        let id = show.id;

        let (credits, similar) = futures::join!(
            self.pool.run("tv credits", self.api.tv_credits(id)),
            self.pool.run("tv similar", self.api.tv_similar(id)),
        );
        show.credits = accept_credits("tv", id, credits);
        show.similar = accept_similar("tv", id, similar);

        let (_, trailer) = futures::join!(
            self.resolve_people(show.credits.as_mut(), &mut show.created_by),
            self.trailers.resolve_trailer(id, MediaType::Tv),
        );
        show.trailer_url = trailer;

        show
    }

    async fn fetch_base<T, F>(&self, label: &str, id: u64, call: F) -> Option<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match self.pool.run(label, call).await {
            Ok(record) => Some(record),
            Err(e) if e.is_absence() => {
                info!("No {} record for {}: {}", label, id, e);
                None
            }
            Err(e) => {
                warn!("Failed to load {} {}: {}", label, id, e);
                None
            }
        }
    }

    /// Resolve every person's external id in place; order is never touched
    async fn resolve_people(&self, credits: Option<&mut Credits>, creators: &mut [Creator]) {
        let identities = &self.identities;

        let (cast, crew) = match credits {
            Some(credits) => (&mut credits.cast[..], &mut credits.crew[..]),
            None => (Default::default(), Default::default()),
        };
        debug!(
            "Resolving external ids for {} cast, {} crew, {} creators",
            cast.len(),
            crew.len(),
            creators.len()
        );

        let cast = join_all(cast.iter_mut().map(move |member| async move {
            member.imdb_id = identities.resolve_external_id(member.id).await;
        }));
        let crew = join_all(crew.iter_mut().map(move |member| async move {
            member.imdb_id = identities.resolve_external_id(member.id).await;
        }));
        let creators = join_all(creators.iter_mut().map(move |creator| async move {
            creator.imdb_id = identities.resolve_external_id(creator.id).await;
        }));

        futures::join!(cast, crew, creators);
    }
}

fn accept_credits(label: &str, id: u64, credits: AppResult<Credits>) -> Option<Credits> {
    match credits {
        Ok(credits) => match credits.id {
            Some(owner) if owner != id => {
                warn!("Credits for {} {} belong to {}; dropping", label, id, owner);
                None
            }
            _ => Some(credits),
        },
        Err(e) => {
            warn!("Credits unavailable for {} {}: {}", label, id, e);
            None
        }
    }
}

fn accept_similar(label: &str, id: u64, similar: AppResult<SimilarSet>) -> Option<SimilarSet> {
    match similar {
        Ok(similar) => Some(similar),
        Err(e) => {
            warn!("Similar titles unavailable for {} {}: {}", label, id, e);
            None
        }
    }
}

fn summary(credits: Option<&Credits>, has_trailer: bool) -> String {
    match credits {
        Some(credits) => format!(
            "{} cast, {} crew, trailer: {}",
            credits.cast.len(),
            credits.crew.len(),
            has_trailer
        ),
        None => format!("no credits, trailer: {}", has_trailer),
    }
}
