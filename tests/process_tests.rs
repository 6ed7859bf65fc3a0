// End to end tests that run the catto binary with a program on stdin and check what it prints.

use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use test_case::test_case;

fn run_catto<I, S>(source: &str, args: I, recursion_limit: Option<&str>) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(env!("CARGO_BIN_EXE_catto"));

    command
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(limit) = recursion_limit {
        command.env("CATTO_RECURSION_LIMIT", limit);
    }

    let mut child = command.spawn().expect("Failed to start catto");

    child
        .stdin
        .take()
        .expect("stdin was not piped")
        .write_all(source.as_bytes())
        .expect("Failed to write the program");

    child.wait_with_output().expect("Failed to wait for catto")
}

#[test_case("3\n4\n$+\n", &[], "7\n"; "program from stdin")]
#[test_case("", &["x", "y"], "x\ny\n"; "arguments seed the stack")]
#[test_case("$swap", &["a", "b"], "b\na\n"; "arguments are used by the program")]
#[test_case("$cat", &["foo", "bar"], "foobar\n"; "cat arguments")]
#[test_case("", &[], ""; "empty program prints nothing")]
#[test_case(r#""line\nbreak""#, &[], "line\nbreak\n"; "values print verbatim")]
#[test_case("1 $~ 2", &[], "-1\n2\n"; "numbers print unchanged")]
#[test_case("99999999999999999999 1 $+", &[], "100000000000000000000\n"; "integers are exact")]
fn prints_final_stack(source: &str, args: &[&str], expected: &str) {
    let output = run_catto(source, args, None);

    assert!(output.status.success(), "catto failed: {:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn recursion_limit_prints_message() {
    let output = run_catto(r#""\"$f\" $eval" :f $f"#, &["left", "over"], Some("64"));

    assert!(output.status.success(), "catto failed: {:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Recursion Limit :(\n");
}

#[test]
fn malformed_recursion_limit_uses_default() {
    let output = run_catto(r#""1 2 $+" $eval"#, std::iter::empty::<&str>(), Some("lots"));

    assert!(output.status.success(), "catto failed: {:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_arguments_are_converted() {
    use std::os::unix::ffi::OsStrExt;

    let argument = OsStr::from_bytes(b"a\xffb");
    let output = run_catto("$dupe $len", [argument], None);

    assert!(output.status.success(), "catto failed: {:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a\u{fffd}b\n3\n");
}
