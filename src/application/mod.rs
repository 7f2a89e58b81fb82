// Application layer - Use cases over the domain
pub mod dashboard_service;
pub mod issue_seeder;
pub mod issue_tracker;
pub mod metrics_provider;
pub mod notification_service;
pub mod table_service;
