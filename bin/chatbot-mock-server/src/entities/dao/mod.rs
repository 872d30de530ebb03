pub mod chat;
pub mod scenario;
pub mod session;

pub use chat::{Message, MessageType};
pub use scenario::Scenario;
pub use session::{Session, SessionStatus};
