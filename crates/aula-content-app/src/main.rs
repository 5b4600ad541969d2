use aula_content_app::App;

fn main() {
    // Set up better panic messages for wasm
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // Tracing must be initialized before dioxus::launch so dioxus skips
    // its own init.
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        use tracing::Level;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );
    }

    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    tracing_subscriber::fmt::init();

    dioxus::launch(App);
}
