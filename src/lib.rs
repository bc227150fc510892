//! Core library exports for the cozy-journal blog.
//!
//! The `data` feature exposes only the content model and its pure operations
//! (enrichment, related entries, pagination). The default `server` feature
//! adds the content API client, services, forms and the Actix-web routes.

pub mod domain;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
