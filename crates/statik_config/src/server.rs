use serde::Deserialize;

// =======================================================
// SERVER CONFIG + DEFAULTS
// =======================================================
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
    /// Content root: every servable file lives under this directory.
    pub root: String,
    /// Upper bound on a single accept() wait so the loop periodically
    /// regains control even with no traffic.
    pub accept_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8010".into(),
            root: "www".into(),
            accept_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    pub fn listen(&self) -> &str {
        &self.listen
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn accept_timeout_secs(&self) -> u64 {
        self.accept_timeout_secs
    }

    pub(crate) fn apply_defaults_from(&mut self, defaults: &ServerConfig) {
        if self.listen.is_empty() {
            self.listen = defaults.listen.clone();
        }
        if self.root.is_empty() {
            self.root = defaults.root.clone();
        }
        if self.accept_timeout_secs == 0 {
            self.accept_timeout_secs = defaults.accept_timeout_secs;
        }
    }
}
