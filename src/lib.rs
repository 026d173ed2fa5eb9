//! Core library exports for the content generation service.
//!
//! The `data` feature exposes the domain types, request forms and the bounded
//! history cache. The `server` feature adds the provider client, the
//! generation gateway (service and HTTP routes) and the client session used
//! by the terminal front end.

pub mod domain;
pub mod forms;
pub mod history;
pub mod repository;

#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod provider;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod studio;
