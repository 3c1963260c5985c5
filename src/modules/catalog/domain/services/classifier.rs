//! Content classification: ordinary TV versus anime.
//!
//! Three predicates with deliberately different strictness:
//!
//! * [`is_anime_listing`] - Animation AND (Japanese origin OR Japanese language).
//!   Picks anime out of general TV search results.
//! * [`is_anime_strict`] - Japanese language AND Animation. Used on feeds that
//!   are already genre-scoped and for the anime detail check.
//! * [`exclude_anime_from_tv_listing`] - Animation AND Japanese origin. Drops
//!   anime from general TV search results.
//!
//! They are not interchangeable; a show can pass one and fail another.

use super::super::entities::{DetailedTvShow, Movie, TvShow, ANIMATION_GENRE_ID};

const JAPAN: &str = "JP";
const JAPANESE: &str = "ja";

/// The listing fields the predicates look at
pub trait ClassificationFacts {
    fn has_genre(&self, genre_id: u32) -> bool;
    fn has_origin_country(&self, country: &str) -> bool;
    fn original_language(&self) -> Option<&str>;
}

impl ClassificationFacts for TvShow {
    fn has_genre(&self, genre_id: u32) -> bool {
        self.genre_ids.contains(&genre_id)
    }

    fn has_origin_country(&self, country: &str) -> bool {
        self.origin_country.iter().any(|c| c == country)
    }

    fn original_language(&self) -> Option<&str> {
        self.original_language.as_deref()
    }
}

impl ClassificationFacts for Movie {
    fn has_genre(&self, genre_id: u32) -> bool {
        self.genre_ids.contains(&genre_id)
    }

    fn has_origin_country(&self, _country: &str) -> bool {
        false
    }

    fn original_language(&self) -> Option<&str> {
        self.original_language.as_deref()
    }
}

impl ClassificationFacts for DetailedTvShow {
    fn has_genre(&self, genre_id: u32) -> bool {
        DetailedTvShow::has_genre(self, genre_id)
    }

    fn has_origin_country(&self, country: &str) -> bool {
        self.origin_country.iter().any(|c| c == country)
    }

    fn original_language(&self) -> Option<&str> {
        self.original_language.as_deref()
    }
}

/// Animation AND (origin includes JP OR original language is `ja`, any case)
pub fn is_anime_listing<T: ClassificationFacts + ?Sized>(item: &T) -> bool {
    let japanese_origin = item.has_origin_country(JAPAN)
        || item
            .original_language()
            .map(|lang| lang.eq_ignore_ascii_case(JAPANESE))
            .unwrap_or(false);

    item.has_genre(ANIMATION_GENRE_ID) && japanese_origin
}

/// Original language exactly `ja` AND Animation
pub fn is_anime_strict<T: ClassificationFacts + ?Sized>(item: &T) -> bool {
    item.original_language() == Some(JAPANESE) && item.has_genre(ANIMATION_GENRE_ID)
}

/// Animation AND origin includes JP
pub fn exclude_anime_from_tv_listing<T: ClassificationFacts + ?Sized>(item: &T) -> bool {
    item.has_genre(ANIMATION_GENRE_ID) && item.has_origin_country(JAPAN)
}
