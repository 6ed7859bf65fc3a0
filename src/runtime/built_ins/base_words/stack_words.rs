use crate::{
    add_builtin_word,
    runtime::{built_ins::BuiltinTable, error, interpreter::Interpreter},
};

/// Duplicate the top value on the data stack.
///
/// Signature: `value -- value value`
fn word_dupe(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop();

    interpreter.push(value.clone());
    interpreter.push(value);

    Ok(())
}

/// Drop the top value on the data stack.
///
/// Signature: `value -- `
fn word_drop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop();

    Ok(())
}

/// Swap the top 2 values on the data stack.
///
/// Signature: `a b -- b a`
fn word_swap(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = interpreter.pop();
    let b = interpreter.pop();

    interpreter.push(a);
    interpreter.push(b);

    Ok(())
}

/// Rotate the top N values, bringing the deepest of them to the top.  The rest keep their order and
/// each move one place down.
///
/// Signature for N = 3: `a b c -- b c a`
fn word_rot<const N: usize>(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    // Top of the stack first.
    let mut values: Vec<_> = (0..N).map(|_| interpreter.pop()).collect();

    if let Some(deepest) = values.pop() {
        for value in values.into_iter().rev() {
            interpreter.push(value);
        }

        interpreter.push(deepest);
    }

    Ok(())
}

/// Register the stack manipulation words.
pub fn register_stack_words(table: &mut BuiltinTable) {
    add_builtin_word!(
        table,
        "drop",
        word_drop,
        "Discard the top value on the data stack.",
        "value -- "
    );

    add_builtin_word!(
        table,
        "dupe",
        word_dupe,
        "Duplicate the top value on the data stack.",
        "value -- value value"
    );

    add_builtin_word!(
        table,
        "swap",
        word_swap,
        "Swap the top 2 values on the data stack.",
        "a b -- b a"
    );

    add_builtin_word!(
        table,
        "rot3",
        word_rot::<3>,
        "Move the 3rd value from the top to the top.",
        "a b c -- b c a"
    );

    add_builtin_word!(
        table,
        "rot4",
        word_rot::<4>,
        "Move the 4th value from the top to the top.",
        "a b c d -- b c d a"
    );

    add_builtin_word!(
        table,
        "rot5",
        word_rot::<5>,
        "Move the 5th value from the top to the top.",
        "a b c d e -- b c d e a"
    );

    add_builtin_word!(
        table,
        "rot6",
        word_rot::<6>,
        "Move the 6th value from the top to the top.",
        "a b c d e f -- b c d e f a"
    );

    add_builtin_word!(
        table,
        "rot7",
        word_rot::<7>,
        "Move the 7th value from the top to the top.",
        "a b c d e f g -- b c d e f g a"
    );

    add_builtin_word!(
        table,
        "rot8",
        word_rot::<8>,
        "Move the 8th value from the top to the top.",
        "a b c d e f g h -- b c d e f g h a"
    );

    add_builtin_word!(
        table,
        "rot9",
        word_rot::<9>,
        "Move the 9th value from the top to the top.",
        "a b c d e f g h i -- b c d e f g h i a"
    );
}
