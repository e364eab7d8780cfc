#[cfg(feature = "csr")]
pub mod app;
pub mod config;
pub mod content;
pub mod icons;
pub mod motion;
pub mod nav;
#[cfg(feature = "serve")]
pub mod server;

#[cfg(feature = "csr")]
pub fn mount() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(App);
}
