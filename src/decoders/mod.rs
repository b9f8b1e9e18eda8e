//! This module contains the code for the crackers.
//! The `interface.rs` defines what each cracker looks like, and
//! `crack_results.rs` what they return.

pub mod crack_results;
pub mod interface;
pub mod vigenere_decoder;
