use core::str::Chars;
use std::{ fmt::{ self,
                  Display,
                  Formatter },
           hash::{ Hash,
                   Hasher } };



/// The location in the source code where a token was found.  Tokens carry this so that logging can
/// point back at the text that produced a word.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq)]
pub struct SourceLocation
{
    /// A description of the source code.  For example the program read from standard input
    /// has a tag of "\<stdin\>" and strings run by eval are tagged "\<eval\>".
    path: String,

    /// The 1 based line number in the source code where the token was found.
    line: usize,

    /// The 1 based column number in the source code where the token was found.
    column: usize
}


impl Hash for SourceLocation
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        self.path.hash(state);
        self.line.hash(state);
        self.column.hash(state);
    }
}


/// Used for logging to show where in the source code a word came from.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error>
    {
        write!(formatter, "{} ({}, {})", self.path, self.line, self.column)
    }
}


impl SourceLocation
{
    /// Create a new SourceLocation with all of the needed information.
    pub fn new_from_info(path: &str, line: usize, column: usize) -> Self {
        SourceLocation { path: path.to_owned(), line, column }
    }

    /// The 1 based line number in the source code.
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// The 1 based column number in the source code.
    pub fn column(&self) -> usize
    {
        self.column
    }
}



/// A buffer over a single line of source code.  The tokenizer uses this to pull characters off the
/// line while the buffer keeps track of the column the cursor is at.
///
/// The buffer is cheap to clone.  The tokenizer clones it to remember a position it may need to
/// rewind to, for example when a quoted segment turns out to have no closing quote.
#[derive(Clone)]
pub struct SourceBuffer<'a>
{
    /// An iterator over the line being processed.  Because this is a reference to the original
    /// text it is important that the source code outlives the SourceBuffer.
    chars: Chars<'a>,

    /// The logical location of the cursor in the source code.
    location: SourceLocation,

    /// The current character being processed.  This is used to peek at the next character without
    /// consuming it.
    current: Option<char>
}


impl<'a> SourceBuffer<'a>
{
    /// Create a new SourceBuffer for one line of source text.  The path is a meaningful tag for the
    /// source and the line number is the 1 based line this text was found on.
    pub fn new(path: &str, line: usize, source: &'a str) -> Self {
        SourceBuffer {
            chars: source.chars(),
            location: SourceLocation::new_from_info(path, line, 1),
            current: None
        }
    }

    /// The location the cursor is at in the source code being processed.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// Take a peek at the next character in the source code without consuming it.
    pub fn peek_next(&mut self) -> Option<char>
    {
        match self.current
        {
            Some(_) => self.current,
            None =>
                {
                    let next = self.chars.next();

                    self.current = next;
                    next
                }
        }
    }

    /// Get and consume the next character in the source code.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = match self.current.take()
            {
                Some(current) => Some(current),
                None => self.chars.next()
            };

        if next.is_some()
        {
            self.location.column += 1;
        }

        next
    }
}
