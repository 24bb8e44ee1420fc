use log::Level;

/// How long the "Copied!" confirmation stays up after a successful copy.
pub const COPY_FEEDBACK_MS: u32 = 2000;

// Debug builds log every spin plan, release builds only lifecycle events
pub fn log_config() -> wasm_logger::Config {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    wasm_logger::Config::new(level)
}
