pub mod catalog;
pub mod store;
pub mod types;

pub use store::KnowledgeBase;
pub use types::{
    Accommodation, Activity, Attraction, BudgetTier, Difficulty, SeasonRecommendation,
};
