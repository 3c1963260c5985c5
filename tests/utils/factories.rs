/// Test data factories using builder pattern
///
/// Provides convenient methods to create provider records with sensible defaults
use showcase_lib::modules::catalog::domain::{
    CastMember, Creator, Credits, CrewMember, DetailedMovie, DetailedTvShow, Genre, Movie, TvShow,
    Video,
};

pub struct TvShowFactory {
    id: u64,
    name: String,
    genre_ids: Vec<u32>,
    origin_country: Vec<String>,
    original_language: Option<String>,
}

impl TvShowFactory {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: format!("Show {}", id),
            genre_ids: vec![18],
            origin_country: vec!["US".to_string()],
            original_language: Some("en".to_string()),
        }
    }

    /// Japanese animation, matches every anime predicate
    pub fn anime(id: u64) -> Self {
        Self::new(id)
            .with_genres(&[16, 10759])
            .with_origin(&["JP"])
            .with_language("ja")
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_genres(mut self, genres: &[u32]) -> Self {
        self.genre_ids = genres.to_vec();
        self
    }

    pub fn with_origin(mut self, origin: &[&str]) -> Self {
        self.origin_country = origin.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.original_language = Some(language.to_string());
        self
    }

    pub fn build(self) -> TvShow {
        TvShow {
            id: self.id,
            name: Some(self.name.clone()),
            original_name: Some(self.name),
            overview: Some("Overview".to_string()),
            poster_path: Some(format!("/poster{}.jpg", self.id)),
            backdrop_path: None,
            first_air_date: Some("2024-04-01".to_string()),
            vote_average: Some(8.1),
            vote_count: Some(1200),
            genre_ids: self.genre_ids,
            origin_country: self.origin_country,
            original_language: self.original_language,
            popularity: Some(120.5),
            trailer_url: None,
            content_type: None,
        }
    }

    /// Detail record with the same classification facts
    pub fn build_detailed(self) -> DetailedTvShow {
        let mut show: DetailedTvShow = serde_json::from_value(serde_json::json!({
            "id": self.id,
            "name": self.name,
            "number_of_seasons": 1,
            "in_production": true,
            "type": "Scripted",
        }))
        .expect("valid detailed tv show");
        show.genres = self
            .genre_ids
            .iter()
            .map(|id| Genre {
                id: *id,
                name: format!("Genre {}", id),
            })
            .collect();
        show.origin_country = self.origin_country;
        show.original_language = self.original_language;
        show
    }
}

pub fn movie(id: u64, title: &str) -> Movie {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "genre_ids": [28],
        "original_language": "en",
        "vote_average": 7.4,
    }))
    .expect("valid movie")
}

pub fn detailed_movie(id: u64, title: &str) -> DetailedMovie {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "runtime": 139,
        "genres": [{"id": 18, "name": "Drama"}],
    }))
    .expect("valid detailed movie")
}

pub fn cast(ids: &[u64]) -> Vec<CastMember> {
    ids.iter()
        .enumerate()
        .map(|(order, id)| CastMember {
            id: *id,
            name: format!("Actor {}", id),
            character: Some(format!("Character {}", id)),
            profile_path: None,
            order: Some(order as u32),
            imdb_id: None,
        })
        .collect()
}

pub fn crew(ids: &[u64]) -> Vec<CrewMember> {
    ids.iter()
        .map(|id| CrewMember {
            id: *id,
            name: format!("Crew {}", id),
            job: Some("Producer".to_string()),
            department: Some("Production".to_string()),
            profile_path: None,
            imdb_id: None,
        })
        .collect()
}

pub fn credits(content_id: u64, cast_ids: &[u64], crew_ids: &[u64]) -> Credits {
    Credits {
        id: Some(content_id),
        cast: cast(cast_ids),
        crew: crew(crew_ids),
    }
}

pub fn creator(id: u64) -> Creator {
    Creator {
        id,
        name: format!("Creator {}", id),
        credit_id: Some(format!("credit-{}", id)),
        profile_path: None,
        imdb_id: None,
    }
}

pub fn video(key: &str, site: &str, video_type: &str) -> Video {
    Video {
        id: format!("id-{}", key),
        key: key.to_string(),
        name: format!("{} {}", video_type, key),
        site: site.to_string(),
        video_type: video_type.to_string(),
        published_at: Some("2024-02-01T17:00:00.000Z".to_string()),
        official: Some(true),
        size: Some(1080),
    }
}

pub fn imdb_id(person_id: u64) -> String {
    format!("nm{:07}", person_id)
}
