use serde::Deserialize;

/// Configuration options for the storefront service.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Listen address, e.g. `127.0.0.1:8080`.
    pub bind_address: String,
    /// Login page of the external authentication service sharing the
    /// session cookie.
    pub auth_service_url: String,
    /// Cookie signing key material. At least 64 bytes.
    pub secret_key: String,
}
