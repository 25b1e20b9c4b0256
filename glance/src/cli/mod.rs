mod cliargs;
mod parseerror;
mod types;

pub use cliargs::CliArgs;
pub use parseerror::ParseError;
pub use types::{ParseTripleError, Triple};
