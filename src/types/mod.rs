pub mod error;
pub mod message;
pub mod response;
pub mod token;
pub mod user;
