//! Data layer of the file-storage administrator client.
//!
//! `services` talks to the backend, `application` holds the screen
//! view-models, and `adapters` renders their outcomes for the terminal.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;
