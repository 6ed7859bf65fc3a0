use crate::lang::source_buffer::{SourceBuffer, SourceLocation};
use std::fmt::{self, Debug, Display, Formatter};
use tracing::warn;

/// The optional prefix character of a token.  It decides what kind of word the token becomes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sigil {
    /// No prefix, the token is a literal value.
    None,

    /// The `:` prefix, the token defines a new word.
    Define,

    /// The `$` prefix, the token calls a word.
    Call,
}

impl Sigil {
    /// Map a prefix character to its sigil, if it is one.
    fn from_char(next: char) -> Option<Sigil> {
        match next {
            ':' => Some(Sigil::Define),
            '$' => Some(Sigil::Call),
            _ => None,
        }
    }
}

/// Print the sigil the way it was written in the source.
impl Display for Sigil {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Sigil::None => Ok(()),
            Sigil::Define => write!(f, ":"),
            Sigil::Call => write!(f, "$"),
        }
    }
}

/// The text of a token.  Quoted text is kept exactly as written, escape sequences are only decoded
/// by the parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenText {
    /// A run of characters up to the next whitespace or quote.
    Bare(String),

    /// The contents between a pair of double quotes, escape sequences still in place.
    Quoted(String),
}

/// A token is a sigil and the text that follows it, along with where it was found.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Where the token starts in the source, including its sigil.
    pub location: SourceLocation,

    /// The prefix character of the token, if any.
    pub sigil: Sigil,

    /// The raw text of the token.
    pub text: TokenText,
}

/// A list of tokens found in the source code.
pub type TokenList = Vec<Token>;

/// Make sure that the tokens are nicely printable.  This reproduces the token as it was written.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.text {
            TokenText::Bare(text) => write!(f, "{}{}", self.sigil, text),
            TokenText::Quoted(text) => write!(f, "{}\"{}\"", self.sigil, text),
        }
    }
}

/// For debugging we include the location the token was found at.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self)
    }
}

/// Check if the given character separates tokens.  New lines never reach the tokenizer, the source
/// is split into lines first.
fn is_whitespace(next: &char) -> bool {
    *next == ' ' || *next == '\t' || *next == '\r'
}

/// Skip over whitespace in the text.  Stopping only at either the end of the buffer or the next
/// non-whitespace character.
fn skip_whitespace(buffer: &mut SourceBuffer) {
    while let Some(next) = buffer.peek_next()
        && is_whitespace(&next)
    {
        let _ = buffer.next_char();
    }
}

/// Pull a bare run of text out of the buffer.  The run stops at whitespace, a double quote or the
/// end of the line.
fn process_bare(buffer: &mut SourceBuffer) -> String {
    let mut text = String::new();

    while let Some(next) = buffer.peek_next()
        && !is_whitespace(&next)
        && next != '"'
    {
        let _ = buffer.next_char();
        text.push(next);
    }

    text
}

/// Process a quoted segment, the buffer must be sitting on the opening quote.  A backslash always
/// takes the following character with it, so an escaped quote does not close the segment.
///
/// Returns None if the line ends before the closing quote.  The buffer is left in an unspecified
/// position in that case and the caller is expected to rewind.
fn process_quoted(buffer: &mut SourceBuffer) -> Option<String> {
    let opening = buffer.next_char();
    debug_assert_eq!(opening, Some('"'));

    let mut text = String::new();

    loop {
        match buffer.next_char()? {
            '"' => break,

            '\\' => {
                let escaped = buffer.next_char()?;

                text.push('\\');
                text.push(escaped);
            }

            next => text.push(next),
        }
    }

    Some(text)
}

/// Process the text part of a token, either bare or quoted.  Returns None if there is no text to be
/// had at this position.
fn process_token_text(buffer: &mut SourceBuffer) -> Option<TokenText> {
    match buffer.peek_next() {
        None => None,
        Some(next) if is_whitespace(&next) => None,
        Some('"') => process_quoted(buffer).map(TokenText::Quoted),
        Some(_) => Some(TokenText::Bare(process_bare(buffer))),
    }
}

/// Tokenize a single line of source code.  The line number is 1 based and is only used for the
/// token locations.
pub fn tokenize_line(path: &str, line_number: usize, line: &str) -> TokenList {
    let mut buffer = SourceBuffer::new(path, line_number, line);
    let mut token_list = TokenList::new();

    while let Some(next) = buffer.peek_next() {
        if is_whitespace(&next) {
            skip_whitespace(&mut buffer);
            continue;
        }

        let location = buffer.location().clone();

        // Try the character as a sigil first.  If nothing usable follows it, the sigil character
        // is read again below as the start of a plain literal.
        if let Some(sigil) = Sigil::from_char(next) {
            let mut attempt = buffer.clone();
            let _ = attempt.next_char();

            if let Some(text) = process_token_text(&mut attempt) {
                buffer = attempt;
                token_list.push(Token { location, sigil, text });
                continue;
            }
        }

        if next == '"' {
            let mut attempt = buffer.clone();

            if let Some(text) = process_quoted(&mut attempt) {
                buffer = attempt;
                token_list.push(Token { location, sigil: Sigil::None, text: TokenText::Quoted(text) });
            } else {
                // No closing quote on this line.  Drop the stray quote and carry on with the rest
                // of the line as ordinary text.
                warn!(%location, "Unterminated string literal, ignoring the opening quote.");
                let _ = buffer.next_char();
            }

            continue;
        }

        let text = process_bare(&mut buffer);
        token_list.push(Token { location, sigil: Sigil::None, text: TokenText::Bare(text) });
    }

    token_list
}

/// Tokenize the source code from a string.  Each line is tokenized on it's own and the results are
/// joined in line order, tokens never span lines.
pub fn tokenize_from_source(path: &str, source: &str) -> TokenList {
    source
        .split('\n')
        .enumerate()
        .flat_map(|(index, line)| tokenize_line(path, index + 1, line))
        .collect()
}
