#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod export;
mod storage;

fn main() {
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(app::App);
}
