// Application layer - Use cases behind the HTTP handlers
pub mod assistant_service;
pub mod forecast_service;
pub mod overview_service;
pub mod plan_service;
pub mod procurement_repository;
pub mod schedule_service;
pub mod vendor_service;
pub mod workflow_service;
