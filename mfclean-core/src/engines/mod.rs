// mfclean-core/src/engines/mod.rs
//! Concrete implementations of the `CleaningEngine` trait.

pub mod regex_engine;
