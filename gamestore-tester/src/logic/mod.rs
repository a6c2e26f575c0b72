pub mod invariants;
pub mod reports;
pub mod tester;
pub mod walker;

pub use tester::*;
