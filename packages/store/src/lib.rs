pub mod config;
pub mod jwt;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ApiConfig, DashboardConfig, ListConfig};
pub use models::{Identity, Session};
pub use session::{KeyValueStore, SessionStore};
