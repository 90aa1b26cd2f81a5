//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`). Also the completion script's binary name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
