/// Module for managing the original source code.
pub mod source_buffer;

/// Module for managing the turning of the source code into a list of tokens for further processing.
pub mod tokenizing;

/// Module for defining the words, the executable units of the Catto language.
pub mod code;

/// Module for turning a list of tokens into a list of words.  String literals have their escape
/// sequences decoded here.
pub mod parsing;
