mod api;
mod app;
mod components;
mod error;
mod i18n;
mod pages;
mod router;
mod session;
mod storage;
mod utils;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
