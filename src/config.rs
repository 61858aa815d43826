use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "NephroCare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the application data directory
/// ~/NephroCare/ on all platforms. `None` when no home directory is known.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_NAME))
}

/// Directory for user-supplied diet_plans.json / stone_weights.json
pub fn reference_dir() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join("reference"))
}

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "warn,nephrocare=info,nephrocare_lib=info"
}
