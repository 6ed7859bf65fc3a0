/// Module holding the rules for reading numbers and booleans out of the string values on the data
/// stack, and for writing results back as strings.
pub mod value;

/// The dictionary module provides the table of user defined words used by the Catto interpreter.
pub mod dictionary;
