//! Focusgate Application Layer
//!
//! Ports, use cases, and the message contract the UI surfaces speak.
pub mod messages;
pub mod ports;
pub mod use_cases;

pub use messages::{MessageRouter, Request, Response};
