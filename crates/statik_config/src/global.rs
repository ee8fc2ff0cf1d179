use serde::Deserialize;

// =======================================================
// GLOBAL CONFIG + DEFAULTS
// =======================================================
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Number of permits in the worker pool: at most this many
    /// connections are handled concurrently.
    pub worker_pool_size: usize,
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            worker_pool_size: 30,
            log_level: "info".into(),
        }
    }
}

impl GlobalConfig {
    pub fn worker_pool_size(&self) -> usize {
        self.worker_pool_size
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub(crate) fn apply_defaults_from(&mut self, defaults: &GlobalConfig) {
        if self.log_level.is_empty() {
            self.log_level = defaults.log_level.clone();
        }
    }
}
