// Domain layer - Procurement entities and pure aggregation logic
pub mod analytics;
pub mod budget;
pub mod chat;
pub mod material;
pub mod overview;
pub mod plan;
pub mod schedule;
pub mod vendor;
pub mod workflow;
