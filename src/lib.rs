//! Fleet-RS Library
//!
//! Core library modules for the Fleet-RS web application: a CRUD REST API
//! for Cars and Users with a single-ownership association between them.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
