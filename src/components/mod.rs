//! The components module contains all shared components for our app.

mod app;
mod app_view;
pub mod audio_manager;
mod auth;
mod icons;
mod player;
mod sidebar;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use audio_manager::{use_player, AudioController, PlayerController};
pub use auth::*;
pub use icons::*;
pub use player::*;
pub use sidebar::*;
