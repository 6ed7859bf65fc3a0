use crate::lang::code::WordList;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// The word sequence bound to a name.  Shared so that a call can splice the body into the work
/// queue while the dictionary keeps it's own copy.
pub type WordBody = Rc<WordList>;

/// The dictionary of user defined words.  Names are bound by `:name` definitions and stay bound for
/// the rest of the run, a later definition of the same name replaces the earlier one.
pub struct Dictionary {
    words: HashMap<String, WordBody>,
}

/// Pretty print the dictionary.  Words are listed by name along with the source form of their
/// bodies.
impl Display for Dictionary {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let max_size = self.words.keys().map(|name| name.len()).max().unwrap_or(0);

        writeln!(formatter, "{} words defined.", self.words.len())?;

        for name in self.names() {
            let body = self.words[name]
                .iter()
                .map(|word| word.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            write!(formatter, "\n{:width$}  --  {}", name, body, width = max_size)?;
        }

        Ok(())
    }
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Bind a word sequence to a name, replacing any previous binding.
    pub fn insert(&mut self, name: String, body: WordList) {
        let _ = self.words.insert(name, Rc::new(body));
    }

    /// Try to get a word's body from the dictionary.
    pub fn try_get(&self, name: &str) -> Option<&WordBody> {
        self.words.get(name)
    }

    /// The names of all of the defined words, sorted.
    pub fn names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.words.keys().collect();
        names.sort();
        names
    }

    /// How many words are defined.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Are there no words defined at all?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Forget every definition.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
