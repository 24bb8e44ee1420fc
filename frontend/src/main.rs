use spin_frontend::{config, App};
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(config::log_config());

    Renderer::<App>::new().render();
}
