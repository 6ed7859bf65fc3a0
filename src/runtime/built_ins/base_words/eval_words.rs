use crate::{
    add_builtin_word,
    lang::parsing::parse_source,
    runtime::{built_ins::BuiltinTable, error, interpreter::Interpreter},
};

/// The source tag given to code run through eval.
pub const EVAL_SOURCE_PATH: &str = "<eval>";

/// Pop a string, parse it and run it against the current stack.  The words run in a new nested
/// frame, so this is the one word that can trip the recursion limit.
///
/// Signature: `source -- ...`
fn word_eval(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let source = interpreter.pop();
    let words = parse_source(EVAL_SOURCE_PATH, &source);

    interpreter.enter_nested(words)
}

/// Register the evaluation words.
pub fn register_eval_words(table: &mut BuiltinTable) {
    add_builtin_word!(
        table,
        "eval",
        word_eval,
        "Parse a string as code and evaluate it against the current stack.",
        "source -- ..."
    );
}
