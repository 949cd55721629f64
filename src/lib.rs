//! Backend for a picture-driven vocabulary trainer.
//!
//! A client picks a [theme](themes), fetches an image and a vocabulary list,
//! and periodically reports per-word progress into a session.

pub mod api;
pub mod config;
pub mod images;
pub mod models;
pub mod sessions;
pub mod themes;
pub mod vocabulary;
