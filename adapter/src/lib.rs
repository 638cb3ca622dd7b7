pub mod database;
pub mod image;
pub mod redis;
pub mod repository;
