// ABOUTME: Centralized constants for the termpix command-line application
// ABOUTME: Contains config file locations, environment variables and geometry defaults

/// Environment variables read by the CLI
pub mod env {
    /// Explicit config file path, takes precedence over every other location
    pub const CONFIG_PATH: &str = "TERMPIX_CONFIG";

    pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

    /// Disables colored diagnostics when set (https://no-color.org)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Config file names and directories
pub mod files {
    pub const APP_DIR: &str = "termpix";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const PROJECT_CONFIG_FILE: &str = "termpix.toml";
}

/// Geometry used when nothing else is configured
pub mod defaults {
    /// Terminal size assumed when the real size cannot be queried
    pub const FALLBACK_COLUMNS: u16 = 80;
    pub const FALLBACK_ROWS: u16 = 24;

    /// Rows kept free below the image so the prompt stays visible
    pub const RESERVE_ROWS: u16 = 1;
}

pub mod messages {
    pub const HELP_HINT: &str = "Try 'termpix --help' for more information";
}
