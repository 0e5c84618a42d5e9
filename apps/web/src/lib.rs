#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod navigation;
pub mod pages;

pub use app::App;
pub use components::NavBar;
pub use config::NavConfig;
pub use models::{Icon, NavItem, NavTarget};
