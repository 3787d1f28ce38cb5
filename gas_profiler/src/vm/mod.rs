//!
//! The virtual machine adapters.
//!

pub mod execution_result;
pub mod revm;
