use crate::{
    add_builtin_word,
    runtime::{
        built_ins::{
            BuiltinTable,
            base_words::{binary_op, trinary_op, unary_op},
        },
        data_structures::value::{NumberType, ToValue, Value, parse_bool, parse_number},
        error,
        interpreter::Interpreter,
    },
};
use num_bigint::BigInt;

/// Helper function to handle math operations.  Handlers for int or floating point operations are
/// passed in as arguments.  If either side isn't an integer both are treated as floats.
fn math_op(
    a: &str,
    b: &str,
    iop: fn(&BigInt, &BigInt) -> BigInt,
    fop: fn(f64, f64) -> f64,
) -> Option<Value> {
    let a = parse_number(a)?;
    let b = parse_number(b)?;

    a.combine(&b, iop, fop).map(|result| result.to_value())
}

/// Helper function to handle numeric comparisons.  Integers and floats compare by value.
fn compare_op(a: &str, b: &str, cop: fn(&NumberType, &NumberType) -> bool) -> Option<Value> {
    let a = parse_number(a)?;
    let b = parse_number(b)?;

    Some(cop(&a, &b).to_value())
}

/// Helper function to handle logic operations.  Both sides have to be booleans, there is no short
/// circuit.
fn logic_op(a: &str, b: &str, bop: fn(bool, bool) -> bool) -> Option<Value> {
    let a = parse_bool(a)?;
    let b = parse_bool(b)?;

    Some(bop(a, b).to_value())
}

/// Divide two numbers.  The result is always a float, even when both sides are integers that
/// divide evenly.  Division by zero fails.
fn divide(a: &NumberType, b: &NumberType) -> Option<f64> {
    let divisor = b.as_float()?;

    if divisor == 0.0 {
        None
    } else {
        Some(a.as_float()? / divisor)
    }
}

/// Add 2 numbers together.
///
/// Signature: `a b -- result`
fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| math_op(a, b, |a, b| a + b, |a, b| a + b))
}

/// Subtract the top number from the one below it.
///
/// Signature: `a b -- result`
fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| math_op(a, b, |a, b| a - b, |a, b| a - b))
}

/// Multiply 2 numbers.
///
/// Signature: `a b -- result`
fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| math_op(a, b, |a, b| a * b, |a, b| a * b))
}

/// Divide the second number by the top number.
///
/// Signature: `a b -- result`
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| {
        divide(&parse_number(a)?, &parse_number(b)?).map(|result| result.to_value())
    })
}

/// Negate a number.
///
/// Signature: `a -- -a`
fn word_negate(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    unary_op(interpreter, |a| {
        let negated = match parse_number(a)? {
            NumberType::Int(num) => NumberType::Int(-num),
            NumberType::Float(num) => NumberType::Float(-num),
        };

        Some(negated.to_value())
    })
}

/// Logical and of 2 booleans.
///
/// Signature: `a b -- result`
fn word_and(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| logic_op(a, b, |a, b| a && b))
}

/// Logical or of 2 booleans.
///
/// Signature: `a b -- result`
fn word_or(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| logic_op(a, b, |a, b| a || b))
}

/// Logically invert a boolean.
///
/// Signature: `a -- result`
fn word_not(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    unary_op(interpreter, |a| Some((!parse_bool(a)?).to_value()))
}

/// Are the 2 strings exactly the same?  No numeric conversion is done, so `1` and `1.0` differ.
///
/// Signature: `a b -- result`
fn word_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| Some((a == b).to_value()))
}

/// Are the 2 strings different?
///
/// Signature: `a b -- result`
fn word_not_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| Some((a != b).to_value()))
}

/// Signature: `a b -- result`
fn word_less(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| compare_op(a, b, |a, b| a < b))
}

/// Signature: `a b -- result`
fn word_greater(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| compare_op(a, b, |a, b| a > b))
}

/// Signature: `a b -- result`
fn word_less_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| compare_op(a, b, |a, b| a <= b))
}

/// Signature: `a b -- result`
fn word_greater_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, |a, b| compare_op(a, b, |a, b| a >= b))
}

/// Pick one of two values based on a condition.  Both values are already on the stack, nothing is
/// evaluated.
///
/// Signature: `condition if-true if-false -- chosen`
fn word_if(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    trinary_op(interpreter, |condition, if_true, if_false| {
        let chosen = if parse_bool(condition)? { if_true } else { if_false };
        Some(chosen.to_string())
    })
}

/// Register the math, logic and comparison words.
pub fn register_math_logic_words(table: &mut BuiltinTable) {
    add_builtin_word!(table, "+", word_add, "Add 2 numbers.", "a b -- result");

    add_builtin_word!(
        table,
        "-",
        word_subtract,
        "Subtract the top number from the one below it.",
        "a b -- result"
    );

    add_builtin_word!(table, "*", word_multiply, "Multiply 2 numbers.", "a b -- result");

    add_builtin_word!(
        table,
        "/",
        word_divide,
        "Divide the second number by the top number.",
        "a b -- result"
    );

    add_builtin_word!(table, "~", word_negate, "Negate a number.", "a -- -a");

    add_builtin_word!(table, "and", word_and, "Logical and of 2 booleans.", "a b -- result");

    add_builtin_word!(table, "or", word_or, "Logical or of 2 booleans.", "a b -- result");

    add_builtin_word!(table, "not", word_not, "Logically invert a boolean.", "a -- result");

    add_builtin_word!(
        table,
        "==",
        word_equal,
        "Are the 2 strings exactly equal?",
        "a b -- result"
    );

    add_builtin_word!(
        table,
        "!=",
        word_not_equal,
        "Are the 2 strings different?",
        "a b -- result"
    );

    add_builtin_word!(
        table,
        "<",
        word_less,
        "Is the second number less than the top number?",
        "a b -- result"
    );

    add_builtin_word!(
        table,
        ">",
        word_greater,
        "Is the second number greater than the top number?",
        "a b -- result"
    );

    add_builtin_word!(
        table,
        "<=",
        word_less_equal,
        "Is the second number less than or equal to the top number?",
        "a b -- result"
    );

    add_builtin_word!(
        table,
        ">=",
        word_greater_equal,
        "Is the second number greater than or equal to the top number?",
        "a b -- result"
    );

    add_builtin_word!(
        table,
        "if",
        word_if,
        "Choose between 2 values based on a boolean condition.",
        "condition if-true if-false -- chosen"
    );
}
