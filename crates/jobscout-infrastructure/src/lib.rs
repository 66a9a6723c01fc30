pub mod config_service;
pub mod dto;
pub mod durable_session_repository;
pub mod http;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::durable_session_repository::DurableSessionRepository;
pub use crate::http::{HttpAccountGateway, HttpAuthGateway, HttpCatalogGateway};
pub use crate::storage::{DurableStorage, FileDurableStorage, InMemoryStorage};
