pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod upload;

pub use db::{create_pool, init_database};
