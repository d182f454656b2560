//! Keep integers sorted with nothing but stack operations.
//!
//! [`SortedStack`] is the core collection. The remaining modules read
//! numbers from stdin, print the results, and wire the two together.

pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod output;
pub mod session;
pub mod stack;

pub use stack::SortedStack;
