mod command;

pub use command::GitCloner;
