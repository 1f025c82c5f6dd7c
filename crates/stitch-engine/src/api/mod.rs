//! Session-level API: the [`Engine`] holding the current and original
//! images, and the closed [`Command`] set an orchestrator drives it with.

mod command;
mod engine;
mod error;

pub use command::Command;
pub use engine::Engine;
pub use error::EngineError;
