pub mod command;
pub mod confirmer;
pub mod controllers;
pub mod notice;
pub mod screen;
pub mod state;
