//! Request-independent logic used by the route handlers.

pub mod nlu;
pub mod platform;

pub use platform::PlatformClient;
