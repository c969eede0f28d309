//! Focusgate Engine Layer
//!
//! Concrete implementations behind the application ports: the in-memory
//! filter structures, the blocklist fetch pipeline, settings storage,
//! and the cloud sync providers.
pub mod clock;
pub mod cloud;
pub mod debounce;
pub mod fetch;
pub mod filter;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use filter::FilterEngine;
