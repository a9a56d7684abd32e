#![allow(dead_code)]

pub mod mock_host;

use aitext::language::Language;
use aitext::session::Session;

/// Text long enough to be offered a summary
pub const LONG_TEXT: &str = "Rust is a multi-paradigm, general-purpose programming language that \
emphasizes performance, type safety, and concurrency. It enforces memory safety without a garbage \
collector, using a borrow checker to track object lifetimes at compile time.";

/// Session whose probe has already seen the host
pub fn available_session() -> Session {
    let mut session = Session::new(Language::En);
    session.probe_mut().record(true);
    session
}
