pub mod classifier;

pub use classifier::{
    exclude_anime_from_tv_listing, is_anime_listing, is_anime_strict, ClassificationFacts,
};
