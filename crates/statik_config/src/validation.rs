use std::net::SocketAddr;

use crate::StatikConfig;

/// Validation output for a loaded Statik configuration.
#[derive(Debug, Default)]
pub struct ConfigReport {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl ConfigReport {
    /// Returns true when no errors were found.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true when at least one error was found.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the collected warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns the collected error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Render warnings and errors into a readable, multi-line string.
    pub fn format(&self) -> String {
        let mut out = String::new();
        if !self.errors.is_empty() {
            out.push_str("Errors:\n");
            for err in &self.errors {
                out.push_str("  - ");
                out.push_str(err);
                out.push('\n');
            }
        }
        if !self.warnings.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str("Warnings:\n");
            for warn in &self.warnings {
                out.push_str("  - ");
                out.push_str(warn);
                out.push('\n');
            }
        }
        out
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

/// Validate a Statik configuration and return a report of issues.
pub fn validate(cfg: &StatikConfig) -> ConfigReport {
    let mut report = ConfigReport::default();

    validate_global(cfg, &mut report);
    validate_server(cfg, &mut report);
    validate_cache(cfg, &mut report);

    report
}

fn validate_global(cfg: &StatikConfig, report: &mut ConfigReport) {
    let pool = cfg.global.worker_pool_size;
    if pool == 0 {
        report.error("global.worker_pool_size must be greater than 0");
    } else if !(10..=30).contains(&pool) {
        report.warn(format!(
            "global.worker_pool_size = {pool} is outside the recommended 10..=30 range"
        ));
    }
}

fn validate_server(cfg: &StatikConfig, report: &mut ConfigReport) {
    if cfg.server.listen.parse::<SocketAddr>().is_err() {
        report.error(format!(
            "server.listen = '{}' is not a valid socket address",
            cfg.server.listen
        ));
    }
    if cfg.server.root.is_empty() {
        report.error("server.root must not be empty");
    }
}

fn validate_cache(cfg: &StatikConfig, report: &mut ConfigReport) {
    if cfg.cache.ttl_secs == 0 {
        report.warn("cache.ttl_secs = 0 disables caching benefits: every request re-reads disk");
    }
}
