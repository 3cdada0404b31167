pub mod config;
pub mod logging;

pub mod content;
pub mod editor;
pub mod entity;
pub mod models;
pub mod url_model;
