pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Runs `mount` only after runtime config has resolved the organization zone.
pub async fn boot(mount: impl FnOnce()) {
    config::init().await;
    mount();
}

/// Installs logging, loads runtime config and mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    log::info!("starting Absensi frontend");

    leptos::spawn_local(boot(router::mount_app));
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use std::cell::Cell;

    #[tokio::test]
    async fn mounts_only_after_config_resolves() {
        let mounted = Cell::new(false);
        super::boot(|| {
            assert!(crate::config::is_resolved());
            assert_eq!(crate::config::current_time_zone(), crate::config::DEFAULT_TIME_ZONE);
            mounted.set(true);
        })
        .await;
        assert!(mounted.get());
    }
}
