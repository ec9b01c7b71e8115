//! Scanner module.
//!
//! The automaton is split by state family:
//! - `core` - the `Scanner` struct, driving loop, and shared helpers
//! - `state` - the closed set of automaton states
//! - `start` - dispatch from the initial state
//! - `identifier` - identifiers and symbol-table updates
//! - `number` - integer and double constants
//! - `operator` - `<`, `>`, `=`, `!` and their `=` forms
//! - `string` - string constants
//! - `comment` - `#` line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod start;
mod state;
mod string;

pub use self::core::{scan, ScanOutput, Scanner};
pub use self::state::State;
