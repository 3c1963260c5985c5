/// Unified search across movies, TV and anime
mod utils;

use showcase_lib::shared::domain::ContentKind;
use showcase_lib::{AppError, ListingItem};
use utils::factories::{self, TvShowFactory};
use utils::fake_catalog::{Endpoint, FakeCatalog};
use utils::helpers::build_service;

fn fixture() -> FakeCatalog {
    FakeCatalog::new()
        .with_movies(vec![
            factories::movie(1, "Ghost in the Shell"),
            factories::movie(2, "Ghost"),
        ])
        .with_shows(vec![
            // plain TV
            TvShowFactory::new(10).build(),
            // Japanese animation: anime bucket only
            TvShowFactory::anime(11).build(),
            // Japanese-language animation produced outside Japan: both buckets
            TvShowFactory::new(12)
                .with_genres(&[16])
                .with_origin(&["KR"])
                .with_language("ja")
                .build(),
            // Japanese live action: TV only
            TvShowFactory::new(13)
                .with_genres(&[18])
                .with_origin(&["JP"])
                .with_language("ja")
                .build(),
        ])
}

fn ids(items: &[ListingItem]) -> Vec<u64> {
    items.iter().map(|i| i.id()).collect()
}

#[tokio::test]
async fn all_results_is_concatenation_of_buckets() {
    let (service, _) = build_service(fixture(), 10);

    let response = service.search_all("ghost", 1).await.unwrap();

    assert_eq!(
        response.all_results.len(),
        response.movies.len() + response.tv_shows.len() + response.anime_shows.len()
    );
    assert_eq!(ids(&response.movies), vec![1, 2]);
    assert_eq!(ids(&response.tv_shows), vec![10, 12, 13]);
    assert_eq!(ids(&response.anime_shows), vec![11, 12]);
    assert_eq!(ids(&response.all_results), vec![1, 2, 10, 12, 13, 11, 12]);
}

#[tokio::test]
async fn buckets_are_tagged() {
    let (service, _) = build_service(fixture(), 10);

    let response = service.search_all("ghost", 1).await.unwrap();

    assert!(response
        .movies
        .iter()
        .all(|i| i.content_type() == Some(ContentKind::Movie)));
    assert!(response
        .tv_shows
        .iter()
        .all(|i| i.content_type() == Some(ContentKind::TvShow)));
    assert!(response
        .anime_shows
        .iter()
        .all(|i| i.content_type() == Some(ContentKind::Anime)));

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["movies"][0]["contentType"], "movie");
    assert_eq!(json["animeShows"][0]["contentType"], "anime");
    assert!(json["tvShows"].is_array());
    assert!(json["allResults"].is_array());
}

#[tokio::test]
async fn failing_bucket_is_empty() {
    let (service, fake) = build_service(fixture().with_failing(Endpoint::SearchMovies), 10);

    let response = service.search_all("ghost", 1).await.unwrap();

    assert!(response.movies.is_empty());
    assert_eq!(response.tv_shows.len(), 3);
    assert_eq!(response.anime_shows.len(), 2);
    assert_eq!(response.all_results.len(), 5);
    assert_eq!(fake.calls(Endpoint::SearchTv), 2);
}

#[tokio::test]
async fn every_provider_down_is_empty_not_error() {
    let fake = fixture()
        .with_failing(Endpoint::SearchMovies)
        .with_failing(Endpoint::SearchTv);
    let (service, _) = build_service(fake, 10);

    let response = service.search_all("ghost", 1).await.unwrap();
    assert!(response.all_results.is_empty());
}

#[tokio::test]
async fn blank_query_is_rejected() {
    let (service, fake) = build_service(fixture(), 10);

    assert!(matches!(
        service.search_all("  ", 1).await,
        Err(AppError::InvalidInput(_))
    ));
    assert_eq!(fake.calls(Endpoint::SearchMovies), 0);
}
