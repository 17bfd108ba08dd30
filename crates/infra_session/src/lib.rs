//! Session Infrastructure
//!
//! Cross-cutting session concerns, structured as injected dependencies
//! rather than ambient globals:
//!
//! - [`PreferenceStore`]: a process-wide key-value preference store with
//!   explicit get/set/remove/clear, swappable for any persistence backend
//! - [`SessionContext`]: an explicitly-constructed context object carrying
//!   theme and auth state, with defined construction and teardown points
//! - [`SaveThrottle`]: a last-write-timestamp guard enforcing a minimum
//!   interval between writes (training-progress saves)

pub mod context;
pub mod prefs;
pub mod throttle;

pub use context::{SessionContext, Theme};
pub use prefs::{keys, MemoryPreferenceStore, PreferenceStore};
pub use throttle::SaveThrottle;
