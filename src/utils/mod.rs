pub mod command;
pub mod error;
pub mod interactive;
pub mod output;

pub use command::*;
pub use interactive::*;
pub use output::*;
