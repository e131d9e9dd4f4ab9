// Infrastructure layer - Configuration and the seeded data catalog
pub mod config;
pub mod seed_catalog;
