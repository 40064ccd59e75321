//! Type aliases for shared state.
//!
//! - [`aliases`]: `Arc<Mutex<Option<T>>>` / `Arc<RwLock<HashMap>>` shorthands used by the
//!   storage substrates and the auto-save scheduler.

pub mod aliases;

pub use aliases::*;
