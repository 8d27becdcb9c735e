pub mod message;
pub mod postgres_service;
pub mod user;
