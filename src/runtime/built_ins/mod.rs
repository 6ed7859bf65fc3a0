/// The core words of the language.
pub mod base_words;

use crate::runtime::{error, interpreter::Interpreter};
use base_words::register_base_words;
use lazy_static::lazy_static;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

/// Definition of a builtin word's handler function.  Builtins only talk to the rest of the program
/// through the interpreter's data stack.  The only error one may return is the recursion guard
/// tripping inside of eval.
pub type BuiltinHandler = fn(&mut dyn Interpreter) -> error::Result<()>;

/// Information about a builtin word.  The description and signature only show up in the table's
/// listing.
#[derive(Clone)]
pub struct BuiltinInfo {
    handler: BuiltinHandler,
    description: String,
    signature: String,
}

impl BuiltinInfo {
    /// The native function implementing the word.
    pub fn handler(&self) -> BuiltinHandler {
        self.handler
    }
}

/// The table of builtin words.  It's filled in once at startup and only read from there on.
pub struct BuiltinTable {
    words: HashMap<String, BuiltinInfo>,
}

impl Default for BuiltinTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty print the table, one word per line with it's signature and description.
impl Display for BuiltinTable {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let max_size = self.words.keys().map(|name| name.len()).max().unwrap_or(0);

        writeln!(formatter, "{} builtin words.", self.words.len())?;

        for name in self.names() {
            let word = &self.words[name];

            write!(
                formatter,
                "\n{:width$}  ( {} )  --  {}",
                name,
                word.signature,
                word.description,
                width = max_size
            )?;
        }

        Ok(())
    }
}

impl BuiltinTable {
    /// Create a new empty table.
    pub fn new() -> BuiltinTable {
        BuiltinTable {
            words: HashMap::new(),
        }
    }

    /// Add a new builtin to the table, replacing any earlier word of the same name.
    pub fn add_word(
        &mut self,
        name: String,
        handler: BuiltinHandler,
        description: String,
        signature: String,
    ) {
        let info = BuiltinInfo {
            handler,
            description,
            signature,
        };

        let _ = self.words.insert(name, info);
    }

    /// Find a builtin by name.
    pub fn try_get(&self, name: &str) -> Option<&BuiltinInfo> {
        self.words.get(name)
    }

    /// The names of all of the builtins, sorted.
    pub fn names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.words.keys().collect();
        names.sort();
        names
    }

    /// How many builtins are registered.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Simplify registering a builtin word with a table.
///
/// Required parameters are, the table to register with.  The name of the word to register.  The
/// word function handler to execute for the word.  A simple description of the word.  As well as
/// the word's stack signature.
#[macro_export]
macro_rules! add_builtin_word {
    (
        $table:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        $table.add_word(
            $name.to_string(),        // Name.
            $function,                // Function handler.
            $description.to_string(), // Word description.
            $signature.to_string(),   // Word signature.
        );
    }};
}

lazy_static! {
    // Built on first use and never changed afterwards.
    static ref BUILTIN_WORDS: BuiltinTable = {
        let mut table = BuiltinTable::new();
        register_base_words(&mut table);
        table
    };
}

/// The process wide builtin table.
pub fn builtin_words() -> &'static BuiltinTable {
    &BUILTIN_WORDS
}
