pub mod messages;
pub mod recommender;
pub mod report;
pub mod scoring;
