//! Server-rendered A1 site: configuration, routes, HTML rendering and the
//! JSON API with its OpenAPI document.

pub mod config;
pub mod dto;
pub mod error;
pub mod format;
pub mod loader;
pub mod openapi;
pub mod render;
pub mod routes;
pub mod state;
pub mod styles;
