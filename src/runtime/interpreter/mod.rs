use crate::{
    lang::{
        code::WordList,
        parsing::parse_source,
    },
    runtime::{
        built_ins::{BuiltinInfo, BuiltinTable},
        config::InterpreterConfig,
        data_structures::{
            dictionary::{Dictionary, WordBody},
            value::Value,
        },
        error,
    },
};

pub mod catto_interpreter;

/// The data stack of values managed by the interpreter.
pub type ValueStack = Vec<Value>;

/// Trait for managing the interpreter's data stack.  Intended to be called by builtin words.
pub trait InterpreterStack {
    /// What has the maximum depth the stack as reached so far?
    fn stack_max_depth(&self) -> usize;

    /// Use to examine the full data stack, bottom first.
    fn stack(&self) -> &ValueStack;

    /// Push a value onto the stack.  This is the primary way of sending values to words.
    fn push(&mut self, value: Value);

    /// Pop a value from the stack.  This is the primary way of receiving outputs from words.  An
    /// empty stack is not an error, it gives the empty string.
    fn pop(&mut self) -> Value;
}

/// The outcome of looking up a called name.
pub enum Resolution {
    /// The name is a builtin.  Builtins always win over user definitions.
    Builtin(&'static BuiltinInfo),

    /// The name is a user defined word with this body.
    Defined(WordBody),

    /// Nothing by this name exists, the call does nothing.
    Unresolved,
}

/// Trait for managing and finding the words known to the interpreter.
pub trait WordManagement {
    /// The table of builtin words.
    fn builtins(&self) -> &'static BuiltinTable;

    /// The dictionary of user defined words.
    fn dictionary(&self) -> &Dictionary;

    /// Bind a word sequence to a name in the dictionary, replacing any earlier definition.
    fn define_word(&mut self, name: String, words: WordList);

    /// Find a user defined word by name.
    fn find_word(&self, name: &str) -> Option<&WordBody> {
        self.dictionary().try_get(name)
    }

    /// Resolve a called name, checking the builtins first and then the dictionary.
    fn resolve(&self, name: &str) -> Resolution {
        if let Some(info) = self.builtins().try_get(name) {
            Resolution::Builtin(info)
        } else if let Some(body) = self.find_word(name) {
            Resolution::Defined(body.clone())
        } else {
            Resolution::Unresolved
        }
    }
}

/// Trait for running words.
pub trait CodeManagement {
    /// How many evaluation frames are currently active.  The running program is one, each eval in
    /// progress adds another.
    fn nesting_depth(&self) -> usize;

    /// Schedule a word list as a new nested frame on top of the ones already running.  The frame
    /// is run by the active evaluation loop, this call returns right away.
    ///
    /// Fails with a recursion limit error if the new frame would go over the configured limit.
    fn enter_nested(&mut self, words: WordList) -> error::Result<()>;

    /// Run a word list to completion against the data stack.
    fn evaluate(&mut self, words: WordList) -> error::Result<()>;

    /// Tokenize, parse and evaluate source text.  The path is used to tag token locations, for
    /// example "\<stdin\>" for the main program.
    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()> {
        let words = parse_source(path, source);
        self.evaluate(words)
    }
}

/// Core interpreter trait.
///
/// This trait brings together the data stack, the word tables and the evaluator.  Everything an
/// evaluation touches lives behind this trait, there is no global mutable state.
pub trait Interpreter: InterpreterStack + WordManagement + CodeManagement {
    /// The settings this interpreter was created with.
    fn config(&self) -> &InterpreterConfig;

    /// Reset the interpreter to a clean state.  Clears the data stack and forgets all user
    /// definitions.  The builtins are unaffected.
    fn reset(&mut self);
}
