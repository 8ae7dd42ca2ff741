pub mod catalog;
pub mod config;
pub mod error;
pub mod home;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;
