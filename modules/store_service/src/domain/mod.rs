//! Domain layer - business logic and services

pub mod repository;
pub mod seeder;
pub mod service;
pub mod validation;

pub use repository::StoreRepository;
pub use seeder::{SeedOutcome, Seeder};
pub use service::Service;
