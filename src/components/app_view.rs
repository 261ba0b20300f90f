use dioxus::prelude::*;

use crate::components::views::{Dashboard, Home, Login};
use crate::components::AppShell;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/login")]
    Login {},
}
