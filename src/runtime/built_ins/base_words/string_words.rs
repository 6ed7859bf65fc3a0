use crate::{
    add_builtin_word,
    runtime::{
        built_ins::{
            BuiltinTable,
            base_words::{binary_op, trinary_op, unary_op},
        },
        data_structures::value::{ToValue, Value, parse_int},
        error,
        interpreter::Interpreter,
    },
};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

/// Bring an index of any size into the i64 range.  Anything beyond it lies past either end of any
/// string, so saturating keeps the clamping below exact.
fn saturate_index(index: &BigInt) -> i64 {
    index.to_i64().unwrap_or(if index.is_negative() { i64::MIN } else { i64::MAX })
}

/// Resolve a slice index against a string of the given length.  Negative indices count back from
/// the end, and anything out of range is clamped to the string.
fn clamp_index(index: i64, length: i64) -> i64 {
    if index < 0 {
        (index + length).max(0)
    } else {
        index.min(length)
    }
}

/// Take the characters in the half open range `start..end`.  Out of range indices are clamped and
/// an empty or inverted range gives the empty string.
fn substring(string: &str, start: &BigInt, end: &BigInt) -> Value {
    let length = string.chars().count() as i64;
    let start = clamp_index(saturate_index(start), length);
    let end = clamp_index(saturate_index(end), length);

    if start >= end {
        return Value::new();
    }

    string
        .chars()
        .skip(start as usize)
        .take((end - start) as usize)
        .collect()
}

/// Get the length of a string in logical characters.
///
/// Signature: `string -- size`
fn word_string_length(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    unary_op(interpreter, |string| Some(string.chars().count().to_value()))
}

/// Join 2 strings, the lower one first.
///
/// Signature: `a b -- ab`
fn word_string_concatenate(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| Some(format!("{}{}", a, b)))
}

/// Extract part of a string.  The indices are read as numbers and truncated, so `1.7` means 1.
///
/// Signature: `string start end -- sub-string`
fn word_string_substring(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    trinary_op(interpreter, |string, start, end| {
        Some(substring(string, &parse_int(start)?, &parse_int(end)?))
    })
}

/// Replace every occurrence of one string with another.
///
/// Signature: `string old new -- updated-string`
fn word_string_replace(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    trinary_op(interpreter, |string, old, new| Some(string.replace(old, new)))
}

/// Register the string words.
pub fn register_string_words(table: &mut BuiltinTable) {
    add_builtin_word!(
        table,
        "len",
        word_string_length,
        "Get the length of a string in characters.",
        "string -- size"
    );

    add_builtin_word!(
        table,
        "cat",
        word_string_concatenate,
        "Join 2 strings together.",
        "a b -- ab"
    );

    add_builtin_word!(
        table,
        "substr",
        word_string_substring,
        "Get the characters of a string from start up to but not including end.",
        "string start end -- sub-string"
    );

    add_builtin_word!(
        table,
        "replace",
        word_string_replace,
        "Replace all occurrences of old with new in a string.",
        "string old new -- updated-string"
    );
}
