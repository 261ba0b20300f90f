use dioxus::prelude::*;

mod api;
mod components;

use components::AppView;

const APP_CSS: &str = include_str!("../assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "onlyvibes" }
        document::Meta { name: "description", content: "Your music app" }
        document::Meta { name: "theme-color", content: "#09090b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        style { {APP_CSS} }

        Router::<AppView> {}
    }
}
