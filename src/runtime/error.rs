
use std::{ error::Error,
           process::Termination,
           fmt::{ self, Debug, Display, Formatter }, process::ExitCode };



pub type Result<T> = std::result::Result<T, ScriptError>;



/// The kinds of failure that can escape an evaluation.  Everything else a script can do wrong is
/// absorbed by the runtime.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ScriptErrorKind
{
    /// Too many eval frames were nested inside each other.
    RecursionLimitExceeded
    {
        /// The nesting limit that was in effect.
        limit: usize
    },

    /// Reading the program or writing the results failed.
    Io
}


/// Any error that ends the evaluation of a Catto program.
#[derive(Clone)]
pub struct ScriptError
{
    /// What went wrong.
    kind: ScriptErrorKind,

    /// The description of the error.
    error: String
}


impl Error for ScriptError
{
}


/// When returned from main, convert the error result to an operating system exit code.
impl Termination for ScriptError
{
    /// Because this type represents an error, the exit code is always FAILURE.
    fn report(self) -> ExitCode
    {
        eprintln!("Error: {}", self);
        ExitCode::FAILURE
    }
}


impl Display for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self.error)
    }
}


impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{:?}: {}", self.kind, self)
    }
}


impl ScriptError
{
    /// Create a new ScriptError.
    pub fn new(kind: ScriptErrorKind, error: String) -> ScriptError
    {
        ScriptError
            {
                kind,
                error
            }
    }

    /// Create the error raised when nested evaluation goes deeper than the limit allows.
    pub fn recursion_limit(limit: usize) -> ScriptError
    {
        ScriptError::new(ScriptErrorKind::RecursionLimitExceeded { limit },
                         format!("Nested evaluation exceeded the limit of {} frames.", limit))
    }

    /// Did the evaluation stop because of the recursion guard?
    pub fn is_recursion_limit(&self) -> bool
    {
        matches!(self.kind, ScriptErrorKind::RecursionLimitExceeded { .. })
    }
}


/// Allow for the conversion of a std::io::Error into a ScriptError.
impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::new(ScriptErrorKind::Io, format!("I/O error: {}", error))
    }
}
