//! Platform constructors for the session store and the gateway.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Desktop** (native): files under `<data_dir>/eagletask/` via [`store::FileStore`]
//!
//! The gateway reads `<config_dir>/eagletask/eagletask.toml` on native builds
//! when present; web builds use the compiled-in configuration.

use api::{Gateway, GatewayConfig, HttpBackend};

/// Session store over the platform's persistent storage.
pub fn make_session_store() -> store::SessionStore<impl store::KvStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::new(store::LocalStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("eagletask");
        store::SessionStore::new(store::FileStore::new(base))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::SessionStore::new(store::MemoryStore::new())
    }
}

pub fn make_gateway() -> Gateway<HttpBackend> {
    Gateway::from_config(&load_config())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> GatewayConfig {
    let Some(path) = dirs::config_dir().map(|d| d.join("eagletask").join(GatewayConfig::filename()))
    else {
        return GatewayConfig::from_build_env();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => GatewayConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
            GatewayConfig::from_build_env()
        }),
        Err(_) => GatewayConfig::from_build_env(),
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> GatewayConfig {
    GatewayConfig::from_build_env()
}
