mod cache;
mod global;
mod server;
mod statik;
mod validation;

pub use cache::CacheConfig;
pub use global::GlobalConfig;
pub use server::ServerConfig;
pub use statik::StatikConfig;
pub use validation::ConfigReport;
