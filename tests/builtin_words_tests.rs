// Parameterized builtin word tests using test-case.  Each case starts from the given stack, bottom
// first, runs the source and checks the whole stack afterwards.

use catto::runtime::config::InterpreterConfig;
use catto::runtime::error::Result;
use catto::runtime::interpreter::catto_interpreter::CattoInterpreter;
use catto::runtime::interpreter::{CodeManagement, InterpreterStack};
use test_case::test_case;

fn eval_and_stack(source: &str, init_stack: &[&str]) -> Result<Vec<String>> {
    let mut interp = CattoInterpreter::with_stack(InterpreterConfig::default(), init_stack.iter().copied());
    interp.process_source("<test>", source)?;
    Ok(interp.stack().clone())
}

// Stack words.
#[test_case("$drop", &["1", "2"], &["1"]; "drop")]
#[test_case("$drop", &[], &[]; "drop on empty stack")]
#[test_case("$drop $drop", &[], &[]; "drop twice on empty stack")]
#[test_case("$dupe", &["a"], &["a", "a"]; "dupe")]
#[test_case("$dupe", &[], &["", ""]; "dupe on empty stack")]
#[test_case("$dupe $drop", &["x", "y"], &["x", "y"]; "dupe then drop is a no-op")]
#[test_case("$swap", &["a", "b"], &["b", "a"]; "swap")]
#[test_case("$swap", &["1", "2", "3", "4"], &["1", "2", "4", "3"]; "swap with multiple elements on stack")]
#[test_case("$swap", &["a"], &["a", ""]; "swap with one element")]
#[test_case("$rot3", &["x", "y", "z"], &["y", "z", "x"]; "rot3")]
#[test_case("$rot3", &["w", "x", "y", "z"], &["w", "y", "z", "x"]; "rot3 with four elements")]
#[test_case("$rot3", &["a"], &["", "a", ""]; "rot3 pads a short stack")]
#[test_case("$rot4", &["a", "b", "c", "d"], &["b", "c", "d", "a"]; "rot4")]
#[test_case("$rot5", &["a", "b", "c", "d", "e"], &["b", "c", "d", "e", "a"]; "rot5")]
#[test_case("$rot9", &["1", "2", "3", "4", "5", "6", "7", "8", "9"],
            &["2", "3", "4", "5", "6", "7", "8", "9", "1"]; "rot9")]
#[test_case("$rot3 $rot3 $rot3", &["x", "y", "z"], &["x", "y", "z"]; "rot3 three times is identity")]
// Arithmetic.
#[test_case("$+", &["2", "3"], &["5"]; "add integers")]
#[test_case("$+", &["2", "3.0"], &["5.0"]; "add int and float")]
#[test_case("$+", &["abc", "1"], &["Undefined"]; "add non number")]
#[test_case("$+", &[], &["Undefined"]; "add on empty stack")]
#[test_case("$+", &["9223372036854775807", "1"], &["9223372036854775808"]; "add past 64 bits")]
#[test_case("$+", &["99999999999999999999", "1"], &["100000000000000000000"]; "add wide integers")]
#[test_case("$*", &["4294967296", "4294967296"], &["18446744073709551616"]; "multiply past 64 bits")]
#[test_case("$-", &["-9223372036854775808", "1"], &["-9223372036854775809"]; "subtract past 64 bits")]
#[test_case("$+", &["1_000", "1"], &["1001"]; "add with digit separators")]
#[test_case("$+", &["1__000", "1"], &["Undefined"]; "doubled digit separator")]
#[test_case("$+", &["1e400", "1"], &["inf"]; "add to infinity")]
#[test_case("$-", &["5", "7"], &["-2"]; "subtract")]
#[test_case("$*", &["4", "2.5"], &["10.0"]; "multiply mixed")]
#[test_case("$*", &["6", "7"], &["42"]; "multiply integers")]
#[test_case("$/", &["6", "3"], &["2.0"]; "divide evenly")]
#[test_case("$/", &["4", "2"], &["2.0"]; "divide integers gives float")]
#[test_case("$/", &["7", "2"], &["3.5"]; "divide with remainder")]
#[test_case("$/", &["7.5", "2.5"], &["3.0"]; "divide floats")]
#[test_case("$/", &["1", "0"], &["Undefined"]; "divide by zero")]
#[test_case("$/", &["1.0", "0"], &["Undefined"]; "divide float by zero")]
#[test_case("$~", &["5"], &["-5"]; "negate integer")]
#[test_case("$~", &["-2.5"], &["2.5"]; "negate float")]
#[test_case("$~", &["x"], &["Undefined"]; "negate non number")]
#[test_case("$~", &["-9223372036854775808"], &["9223372036854775808"]; "negate past 64 bits")]
// Logic.
#[test_case("$and", &["True", "True"], &["True"]; "and true true")]
#[test_case("$and", &["True", "False"], &["False"]; "and true false")]
#[test_case("$and", &["False", "maybe"], &["Undefined"]; "and does not short circuit")]
#[test_case("$and", &["true", "True"], &["Undefined"]; "and is case sensitive")]
#[test_case("$or", &["False", "True"], &["True"]; "or false true")]
#[test_case("$or", &["False", "False"], &["False"]; "or false false")]
#[test_case("$or", &["True", "1"], &["Undefined"]; "or does not short circuit")]
#[test_case("$not", &["True"], &["False"]; "not true")]
#[test_case("$not", &["False"], &["True"]; "not false")]
#[test_case("$not", &["0"], &["Undefined"]; "not non boolean")]
// Comparison.
#[test_case("$==", &["a", "a"], &["True"]; "equal strings")]
#[test_case("$==", &["1", "1.0"], &["False"]; "equal does not convert numbers")]
#[test_case("$!=", &["a", "b"], &["True"]; "not equal")]
#[test_case("$!=", &["a", "a"], &["False"]; "not equal same")]
#[test_case("$<", &["2", "10"], &["True"]; "less is numeric")]
#[test_case("$<", &["2.5", "2"], &["False"]; "less is false")]
#[test_case("$<", &["a", "1"], &["Undefined"]; "less with non number")]
#[test_case("$>", &["9007199254740993", "9007199254740992.0"], &["True"]; "compare int and float exactly")]
#[test_case("$<", &["99999999999999999999", "100000000000000000001"], &["True"]; "compare wide integers")]
#[test_case("$>", &["10", "2"], &["True"]; "greater")]
#[test_case("$<=", &["2", "2.0"], &["True"]; "less equal mixed")]
#[test_case("$>=", &["1", "2"], &["False"]; "greater equal")]
#[test_case("$if", &["True", "yes", "no"], &["yes"]; "if true")]
#[test_case("$if", &["False", "yes", "no"], &["no"]; "if false")]
#[test_case("$if", &["maybe", "yes", "no"], &["Undefined"]; "if non boolean")]
// Strings.
#[test_case("$len", &["hello"], &["5"]; "len")]
#[test_case("$len", &[""], &["0"]; "len of empty")]
#[test_case("$len", &["h\u{e9}llo"], &["5"]; "len counts characters")]
#[test_case("$cat", &["foo", "bar"], &["foobar"]; "cat")]
#[test_case("$substr", &["hello", "1", "3"], &["el"]; "substr")]
#[test_case("$substr", &["hello", "-3", "10"], &["llo"]; "substr clamps")]
#[test_case("$substr", &["hello", "0", "-1"], &["hell"]; "substr negative end")]
#[test_case("$substr", &["hello", "3", "1"], &[""]; "substr inverted range")]
#[test_case("$substr", &["hello", "1.9", "3.2"], &["el"]; "substr truncates indices")]
#[test_case("$substr", &["hello", "a", "3"], &["Undefined"]; "substr bad index")]
#[test_case("$substr", &["hello", "-1e30", "1e30"], &["hello"]; "substr with huge indices")]
#[test_case("$replace", &["banana", "an", "AN"], &["bANANa"]; "replace")]
#[test_case("$replace", &["aaa", "a", ""], &[""]; "replace with nothing")]
// Conversion.
#[test_case("$int", &["3.9"], &["3"]; "int truncates")]
#[test_case("$int", &["-3.9"], &["-3"]; "int truncates toward zero")]
#[test_case("$int", &["7"], &["7"]; "int of int")]
#[test_case("$int", &["x"], &["Undefined"]; "int of non number")]
#[test_case("$int", &["inf"], &["Undefined"]; "int of infinity")]
#[test_case("$int", &["1e30"], &["1000000000000000019884624838656"]; "int of large float")]
#[test_case("$int", &["99999999999999999999"], &["100000000000000000000"]; "int reads through float")]
#[test_case("$float", &["3"], &["3.0"]; "float of int")]
#[test_case("$float", &["2.5"], &["2.5"]; "float of float")]
#[test_case("$float", &["1e20"], &["1e+20"]; "float uses exponents for large values")]
#[test_case("$float", &["x"], &["Undefined"]; "float of non number")]
#[test_case("$float", &["1_000.5"], &["1000.5"]; "float with digit separators")]
// Eval.
#[test_case("$eval", &["1 2 $+"], &["3"]; "eval")]
#[test_case("$eval", &["10", "$dupe $*"], &["100"]; "eval shares the stack")]
#[test_case("$eval", &[], &[]; "eval of empty stack")]
fn builtin_word(source: &str, init_stack: &[&str], expected: &[&str]) {
    let result = eval_and_stack(source, init_stack).unwrap();
    assert_eq!(result, expected);
}
