//! Event handling for NSE Cockpit.
//!
//! Terminal input is polled once per loop iteration and translated into
//! store [`Action`](crate::state::Action)s.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::KeyBinding;
