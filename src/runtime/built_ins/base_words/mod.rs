/// Words that manipulate the data stack.
mod stack_words;

/// Words that work with math, logic and comparisons.
mod math_logic_words;

/// Words that work with strings.
mod string_words;

/// Words that convert between number formats.
mod conversion_words;

/// Words that evaluate code at run time.
mod eval_words;

use crate::runtime::{
    built_ins::{
        BuiltinTable,
        base_words::{
            conversion_words::register_conversion_words, eval_words::register_eval_words,
            math_logic_words::register_math_logic_words, stack_words::register_stack_words,
            string_words::register_string_words,
        },
    },
    data_structures::value::{UNDEFINED, Value},
    error,
    interpreter::Interpreter,
};
use tracing::debug;

/// Push an operation's result, or the Undefined marker if it couldn't be computed.
fn push_result(interpreter: &mut dyn Interpreter, result: Option<Value>, operands: &[&Value]) {
    let value = result.unwrap_or_else(|| {
        debug!(?operands, "Operation failed on it's operands, pushing {}.", UNDEFINED);
        UNDEFINED.to_string()
    });

    interpreter.push(value);
}

/// Helper for words that take one value and produce one.  Handles the stack and failure, the
/// operation itself only has to compute the result.
pub(crate) fn unary_op(
    interpreter: &mut dyn Interpreter,
    op: fn(&str) -> Option<Value>,
) -> error::Result<()> {
    let a = interpreter.pop();
    let result = op(&a);

    push_result(interpreter, result, &[&a]);
    Ok(())
}

/// Helper for words that take two values and produce one.  The value pushed first is the first
/// argument to the operation.
pub(crate) fn binary_op(
    interpreter: &mut dyn Interpreter,
    op: fn(&str, &str) -> Option<Value>,
) -> error::Result<()> {
    let b = interpreter.pop();
    let a = interpreter.pop();
    let result = op(&a, &b);

    push_result(interpreter, result, &[&a, &b]);
    Ok(())
}

/// Helper for words that take three values and produce one.  Arguments are passed in push order.
pub(crate) fn trinary_op(
    interpreter: &mut dyn Interpreter,
    op: fn(&str, &str, &str) -> Option<Value>,
) -> error::Result<()> {
    let c = interpreter.pop();
    let b = interpreter.pop();
    let a = interpreter.pop();
    let result = op(&a, &b, &c);

    push_result(interpreter, result, &[&a, &b, &c]);
    Ok(())
}

/// Called to register all of the core words of the language.
pub fn register_base_words(table: &mut BuiltinTable) {
    register_stack_words(table);
    register_math_logic_words(table);
    register_string_words(table);
    register_conversion_words(table);
    register_eval_words(table);
}
