pub mod api;
pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod logs;
pub mod models;
pub mod panels;
pub mod profile;
pub mod state;
pub mod status;
pub mod ui;
pub mod view;

pub use app::router;
pub use client::CoachClient;
pub use config::Config;
pub use state::AppState;
pub use view::Page;
