use crate::{
    add_builtin_word,
    runtime::{
        built_ins::{BuiltinTable, base_words::unary_op},
        data_structures::value::{ToValue, parse_float, parse_int},
        error,
        interpreter::Interpreter,
    },
};

/// Convert a number to an integer, truncating toward zero.
///
/// Signature: `number -- integer`
fn word_to_int(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    unary_op(interpreter, |value| Some(parse_int(value)?.to_value()))
}

/// Convert a number to it's floating point form.
///
/// Signature: `number -- float`
fn word_to_float(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    unary_op(interpreter, |value| Some(parse_float(value)?.to_value()))
}

/// Register the number conversion words.
pub fn register_conversion_words(table: &mut BuiltinTable) {
    add_builtin_word!(
        table,
        "int",
        word_to_int,
        "Convert a number to an integer, truncating any fraction.",
        "number -- integer"
    );

    add_builtin_word!(
        table,
        "float",
        word_to_float,
        "Convert a number to floating point.",
        "number -- float"
    );
}
