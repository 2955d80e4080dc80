mod config;
mod content;
mod navbar;
mod reveal;
mod routes;
mod scroll;
mod typewriter;

fn main() {
    dioxus::launch(routes::App);
}
