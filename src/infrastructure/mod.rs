// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod github_client;
pub mod http_response;
pub mod issue_plan;
pub mod static_provider;
