/// All of the core data structures used by the Catto interpreter.
pub mod data_structures;

/// Module for defining the built-in native words that are available to the Catto interpreter.
#[macro_use]
pub mod built_ins;

/// Module for defining the errors that can end an evaluation.
pub mod error;

/// Settings for the interpreter.
pub mod config;

/// Module for defining the core functionality of the Catto interpreter.  This includes the traits
/// for managing the interpreter's state and the evaluator itself.
pub mod interpreter;
