use std::fmt::{self, Display, Formatter};

/// A word is one classified unit of program text.  Once built a word is never modified, the
/// interpreter only ever reads them.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Word {
    /// Push the value onto the data stack.
    Literal(String),

    /// Pop a string, parse it and bind the resulting words to the name.
    Define(String),

    /// Execute the builtin or user defined word of the name.
    Call(String),
}

/// A sequence of words, either a whole program, the body of a definition or a string run by eval.
pub type WordList = Vec<Word>;

/// Render the word back into source form, quoting the text when a bare token couldn't hold it.
/// Used when logging the words being executed.
impl Display for Word {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let (sigil, text) = match self {
            Word::Literal(text) => ("", text),
            Word::Define(text) => (":", text),
            Word::Call(text) => ("$", text),
        };

        if needs_quotes(text) {
            write!(f, "{}{}", sigil, stringify(text))
        } else {
            write!(f, "{}{}", sigil, text)
        }
    }
}

/// Would the text come back differently if written as a bare token?
fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.starts_with(':')
        || text.starts_with('$')
        || text
            .chars()
            .any(|c| matches!(c, ' ' | '\t' | '\r' | '\n' | '"' | '\\'))
}

/// Convert a string into a quoted literal, escaping the characters the tokenizer or the escape
/// decoder would otherwise interpret.
pub fn stringify(text: &str) -> String {
    let mut result = String::new();

    result.push('"');

    for character in text.chars() {
        match character {
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\\' => result.push_str("\\\\"),
            _ => result.push(character),
        }
    }

    result.push('"');

    result
}
