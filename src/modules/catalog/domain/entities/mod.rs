pub mod detailed;
pub mod listing;
pub mod video;

pub use detailed::{
    CastMember, Creator, Credits, CrewMember, DetailRecord, DetailedMovie, DetailedTvShow, Genre,
    Network, ProductionCompany, ProductionCountry, Season, SimilarEntry, SimilarSet,
    SpokenLanguage,
};
pub use listing::{ListingItem, Movie, SearchAllResponse, TvShow};
pub use video::{Video, VideoListing};

use serde::{Deserialize, Deserializer};

/// Provider genre id for "Animation"
pub const ANIMATION_GENRE_ID: u32 = 16;

/// Decode a JSON array that the provider may also send as `null`
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
