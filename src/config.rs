//! Environment-derived settings.

/// Process-wide settings consumed by the boundary layers.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// When set, every mutating operation is rejected before reaching
    /// the store.
    pub read_only: bool,
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// `READ_ONLY_MODE` enables the read-only gate when set to `1`,
    /// `true`, or `yes` (case-insensitive).
    pub fn from_env() -> Self {
        let read_only = std::env::var("READ_ONLY_MODE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self { read_only }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
