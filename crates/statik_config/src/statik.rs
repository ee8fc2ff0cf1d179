use serde::Deserialize;

use crate::validation::{ConfigReport, validate};
use crate::{CacheConfig, GlobalConfig, ServerConfig};

// =======================================================
// STATIK CONFIG — main config
// =======================================================
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StatikConfig {
    #[serde(default)]
    pub global: GlobalConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl StatikConfig {
    pub fn global(&self) -> &GlobalConfig {
        &self.global
    }

    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    pub fn cache(&self) -> &CacheConfig {
        &self.cache
    }

    /// Validate the configuration and return a report of warnings and errors.
    pub fn validate(&self) -> ConfigReport {
        validate(self)
    }

    pub fn from_file(file_name: &str) -> Result<Self, config::ConfigError> {
        let built = config::Config::builder()
            .add_source(config::File::new(file_name, config::FileFormat::Ini).required(false))
            .build()?;

        let mut cfg: StatikConfig = built.try_deserialize()?;

        cfg.apply_defaults();
        Ok(cfg)
    }

    pub fn from_file_or_default(file_name: &str) -> Self {
        match Self::from_file(file_name) {
            Ok(cfg) => {
                let report = cfg.validate();
                if report.has_errors() {
                    eprintln!("Invalid config in '{file_name}':");
                    eprintln!("{}", report.format());
                    eprintln!("Using default config (in-memory)...");
                    StatikConfig::default()
                } else {
                    if !report.warnings().is_empty() {
                        eprintln!("Config warnings in '{file_name}':");
                        eprintln!("{}", report.format());
                    }
                    cfg
                }
            }
            Err(e) => {
                eprintln!("Error reading config '{file_name}': {e}");
                eprintln!("Using default config (in-memory)...");
                StatikConfig::default()
            }
        }
    }

    fn apply_defaults(&mut self) {
        let def_global = GlobalConfig::default();
        self.global.apply_defaults_from(&def_global);

        let def_server = ServerConfig::default();
        self.server.apply_defaults_from(&def_server);
    }

    pub fn print(&self) {
        println!("================ STATIK CONFIG ================");
        println!("\n[global]");
        println!("  worker_pool_size     = {}", self.global.worker_pool_size);
        println!("  log_level            = {}", self.global.log_level);
        println!("\n[server]");
        println!("  listen               = {}", self.server.listen);
        println!("  root                 = {}", self.server.root);
        println!(
            "  accept_timeout_secs  = {}",
            self.server.accept_timeout_secs
        );
        println!("\n[cache]");
        println!("  ttl_secs             = {}", self.cache.ttl_secs);
        println!("===============================================");
    }
}
