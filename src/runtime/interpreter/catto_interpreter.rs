use std::collections::VecDeque;
use tracing::{ debug, trace, warn };
use crate::{ lang::{ code::{ Word,
                             WordList },
                     parsing::parse_source },
             runtime::{ built_ins::{ builtin_words,
                                     BuiltinTable },
                        config::InterpreterConfig,
                        data_structures::{ dictionary::Dictionary,
                                           value::Value },
                        error::{ self,
                                 ScriptError },
                        interpreter::{ CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       Resolution,
                                       ValueStack,
                                       WordManagement } } };



/// The words of one evaluation frame that are still waiting to run.  Words are taken from the
/// front, and calls to user words splice their bodies onto the front.
pub type WordQueue = VecDeque<Word>;

/// The stack of active evaluation frames.  The bottom frame is the outermost program, every eval in
/// progress has a frame above it.
pub type FrameStack = Vec<WordQueue>;



/// The core interpreter implementation for the Catto language.
///
/// Evaluation never recurses on the native stack.  Nested evaluation from eval pushes a new frame
/// and the single loop in `evaluate` keeps pulling words from whatever frame is on top.  This makes
/// the nesting depth a plain number that can be checked against the configured limit.
pub struct CattoInterpreter
{
    /// The settings for this interpreter.
    config: InterpreterConfig,

    /// The maximum depth of the data stack during execution.
    max_depth: usize,

    /// The data stack used by the interpreter.
    stack: ValueStack,


    /// The dictionary of user words known by the interpreter.
    dictionary: Dictionary,

    /// The process wide builtin words.
    builtins: &'static BuiltinTable,


    /// The evaluation frames currently being run.
    frames: FrameStack
}


impl Interpreter for CattoInterpreter
{
    fn config(&self) -> &InterpreterConfig
    {
        &self.config
    }

    fn reset(&mut self)
    {
        self.stack.clear();
        self.dictionary.clear();
        self.frames.clear();
        self.max_depth = 0;
    }
}


impl InterpreterStack for CattoInterpreter
{
    fn stack_max_depth(&self) -> usize
    {
        self.max_depth
    }

    fn stack(&self) -> &ValueStack
    {
        &self.stack
    }

    fn push(&mut self, value: Value)
    {
        self.stack.push(value);

        if self.stack.len() > self.max_depth
        {
            self.max_depth = self.stack.len();
        }
    }

    fn pop(&mut self) -> Value
    {
        self.stack.pop().unwrap_or_default()
    }
}


impl WordManagement for CattoInterpreter
{
    fn builtins(&self) -> &'static BuiltinTable
    {
        self.builtins
    }

    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    fn define_word(&mut self, name: String, words: WordList)
    {
        debug!(%name, words = words.len(), "Defining word.");
        self.dictionary.insert(name, words);
    }
}


impl CodeManagement for CattoInterpreter
{
    fn nesting_depth(&self) -> usize
    {
        self.frames.len()
    }

    fn enter_nested(&mut self, words: WordList) -> error::Result<()>
    {
        let limit = self.config().recursion_limit;

        if self.frames.len() >= limit
        {
            warn!(limit, "Recursion limit reached, abandoning evaluation.");
            return Err(ScriptError::recursion_limit(limit));
        }

        trace!(depth = self.frames.len() + 1, words = words.len(), "Entering evaluation frame.");
        self.frames.push(WordQueue::from(words));

        Ok(())
    }

    fn evaluate(&mut self, words: WordList) -> error::Result<()>
    {
        // Frames below this depth belong to whoever called us.
        let base_depth = self.frames.len();

        let result = self.enter_nested(words)
                         .and_then(|_| self.run_frames(base_depth));

        if result.is_err()
        {
            self.frames.truncate(base_depth);
        }

        result
    }
}


impl CattoInterpreter
{
    /// Take the next word to run, dropping exhausted frames along the way.  A frame is only dropped
    /// once we come back to it for another word, so an eval at the end of a frame still nests
    /// inside of it.
    fn next_word(&mut self, base_depth: usize) -> Option<Word>
    {
        while self.frames.len() > base_depth
        {
            if let Some(word) = self.frames.last_mut()?.pop_front()
            {
                return Some(word);
            }

            let _ = self.frames.pop();
        }

        None
    }

    /// Run words until every frame above the base depth is exhausted.
    fn run_frames(&mut self, base_depth: usize) -> error::Result<()>
    {
        while let Some(word) = self.next_word(base_depth)
        {
            self.execute_word(word)?;
        }

        Ok(())
    }

    /// Execute a single word against the stack.
    fn execute_word(&mut self, word: Word) -> error::Result<()>
    {
        trace!(%word, depth = self.frames.len(), "Executing word.");

        match word
        {
            Word::Literal(value) => self.push(value),

            Word::Define(name) =>
                {
                    let source = self.pop();
                    let words = parse_source(&format!("<define {}>", name), &source);

                    self.define_word(name, words);
                },

            Word::Call(name) =>
                match self.resolve(&name)
                {
                    Resolution::Builtin(info) => (info.handler())(self)?,
                    Resolution::Defined(body) => self.splice(&body),
                    Resolution::Unresolved => debug!(%name, "Call to an undefined word ignored.")
                }
        }

        Ok(())
    }

    /// Inline a word body at the front of the current frame.  This does not add a frame, so user
    /// words calling themselves never run into the recursion limit.
    fn splice(&mut self, body: &WordList)
    {
        if let Some(frame) = self.frames.last_mut()
        {
            for word in body.iter().rev()
            {
                frame.push_front(word.clone());
            }
        }
    }
}


impl CattoInterpreter
{
    /// Create an interpreter with the default settings.
    pub fn new() -> CattoInterpreter
    {
        CattoInterpreter::with_config(InterpreterConfig::default())
    }

    /// Create an interpreter with the given settings.
    pub fn with_config(config: InterpreterConfig) -> CattoInterpreter
    {
        CattoInterpreter
            {
                config,

                max_depth: 0,
                stack: Vec::with_capacity(20),

                dictionary: Dictionary::new(),
                builtins: builtin_words(),

                frames: FrameStack::with_capacity(8)
            }
    }

    /// Create an interpreter whose stack starts out holding the given values, the first value at
    /// the bottom.
    pub fn with_stack<I, S>(config: InterpreterConfig, values: I) -> CattoInterpreter
        where I: IntoIterator<Item = S>,
              S: Into<Value>
    {
        let mut interpreter = CattoInterpreter::with_config(config);

        for value in values
        {
            interpreter.push(value.into());
        }

        interpreter
    }
}


impl Default for CattoInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
