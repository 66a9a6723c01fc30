//! reqwest implementations of the backend collaborators.

mod account_gateway;
mod auth_gateway;
mod catalog_gateway;
mod client;

pub use account_gateway::HttpAccountGateway;
pub use auth_gateway::HttpAuthGateway;
pub use catalog_gateway::HttpCatalogGateway;
pub use client::build_client;
