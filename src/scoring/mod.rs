// Scoring: influencer profiles and the relevance/engagement ranking.

pub mod profile;
pub mod ranking;
