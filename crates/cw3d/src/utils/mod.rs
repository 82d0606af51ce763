pub mod error_messages;
pub mod git;
pub mod log;
pub mod term;
pub mod wizard;
