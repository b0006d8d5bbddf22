pub mod app;
pub mod message;
