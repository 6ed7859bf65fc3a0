use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// Values on the data stack are always strings.  Numbers and booleans only exist for the duration
/// of a single operation, so this module holds the rules for reading them out of strings and
/// writing them back.
pub type Value = String;

/// The value pushed by an operation that could not compute its result.
pub const UNDEFINED: &str = "Undefined";

/// The text of a true boolean.
pub const TRUE_VALUE: &str = "True";

/// The text of a false boolean.
pub const FALSE_VALUE: &str = "False";

/// A number read from the stack can be either an integer or a floating point value.  Integers have
/// no fixed width, so integer math is always exact.
#[derive(Clone)]
pub enum NumberType {
    /// We're holding an integer value.
    Int(BigInt),

    /// We're holding a floating point value.
    Float(f64),
}

/// Compare an integer against a float by exact value.  Nan is unordered.
fn compare_int_float(a: &BigInt, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        return None;
    }

    if b.is_infinite() {
        return Some(if b > 0.0 { Ordering::Less } else { Ordering::Greater });
    }

    let whole = b.trunc();

    match a.cmp(&BigInt::from_f64(whole)?) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(b - whole)),
        ordering => Some(ordering),
    }
}

impl PartialEq for NumberType {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for NumberType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (NumberType::Int(a), NumberType::Int(b)) => Some(a.cmp(b)),
            (NumberType::Float(a), NumberType::Float(b)) => a.partial_cmp(b),
            (NumberType::Int(a), NumberType::Float(b)) => compare_int_float(a, *b),
            (NumberType::Float(a), NumberType::Int(b)) => {
                compare_int_float(b, *a).map(Ordering::reverse)
            }
        }
    }
}

/// Print the value of the held number the way it's written back to the stack.
impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Print the value of the held number as well as an indicator of which variant we're holding for
/// debugging purposes.
impl Debug for NumberType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NumberType::Int(num) => write!(f, "{} i", num),
            NumberType::Float(num) => write!(f, "{} f", format_float(*num)),
        }
    }
}

impl NumberType {
    /// Get the value as a float, converting integers.  Integers too large for a float fail.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            NumberType::Int(num) => num.to_f64().filter(|value| value.is_finite()),
            NumberType::Float(num) => Some(*num),
        }
    }

    /// Apply a binary operation.  If both sides are integers the integer version is used, otherwise
    /// both are widened to floats.
    pub fn combine(
        &self,
        other: &NumberType,
        iop: fn(&BigInt, &BigInt) -> BigInt,
        fop: fn(f64, f64) -> f64,
    ) -> Option<NumberType> {
        match (self, other) {
            (NumberType::Int(a), NumberType::Int(b)) => Some(NumberType::Int(iop(a, b))),
            (a, b) => Some(NumberType::Float(fop(a.as_float()?, b.as_float()?))),
        }
    }
}

/// Convert an arbitrary data type to a stack value.
pub trait ToValue {
    /// Implement to handle the actual conversion.
    fn to_value(&self) -> Value;
}

impl ToValue for BigInt {
    fn to_value(&self) -> Value {
        self.to_string()
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        self.to_string()
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        format_float(*self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        if *self {
            TRUE_VALUE.to_string()
        } else {
            FALSE_VALUE.to_string()
        }
    }
}

impl ToValue for NumberType {
    fn to_value(&self) -> Value {
        match self {
            NumberType::Int(num) => num.to_value(),
            NumberType::Float(num) => num.to_value(),
        }
    }
}

/// Remove `_` digit separators.  A separator has to sit between two digits, so `1_000` reads as
/// `1000` while `_1`, `1_` and `1__0` fail.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut stripped = String::with_capacity(text.len());

    for (index, &next) in chars.iter().enumerate() {
        if next != '_' {
            stripped.push(next);
            continue;
        }

        let before = index.checked_sub(1).and_then(|at| chars.get(at));
        let after = chars.get(index + 1);

        if !matches!((before, after), (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit())
        {
            return None;
        }
    }

    Some(Cow::Owned(stripped))
}

/// Read a floating point value.  Surrounding whitespace is ignored, `inf` and `nan` are accepted.
pub fn parse_float(text: &str) -> Option<f64> {
    strip_digit_separators(text.trim())?.parse::<f64>().ok()
}

/// Read a number, preferring an integer.  Only text that isn't an integer is tried as a float, so
/// `"3"` is an integer while `"3.0"` is a float.
pub fn parse_number(text: &str) -> Option<NumberType> {
    let trimmed = text.trim();
    let integer = strip_digit_separators(trimmed).and_then(|digits| BigInt::from_str(&digits).ok());

    match integer {
        Some(num) => Some(NumberType::Int(num)),
        None => parse_float(trimmed).map(NumberType::Float),
    }
}

/// Read an integer by way of a float, truncating toward zero.  So `"3.9"` reads as 3 and `"1e30"`
/// reads as the exact integer value of that float.  Infinities and nan fail.
pub fn parse_int(text: &str) -> Option<BigInt> {
    BigInt::from_f64(parse_float(text)?.trunc())
}

/// Read a boolean.  Only the exact strings `True` and `False` are accepted.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        TRUE_VALUE => Some(true),
        FALSE_VALUE => Some(false),
        _ => None,
    }
}

/// Format a float with the shortest digits that read back to the same value.  The text always shows
/// it's a float: either a fractional part (`5.0`) or an exponent with a sign and at least two
/// digits (`1e+16`, `1.5e-05`).  Exponents are used below 1e-4 and from 1e16 up.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text = format!("{:?}", value);

    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };

            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }

        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> BigInt {
        BigInt::from_str(text).unwrap()
    }

    #[test]
    fn prefers_integers() {
        assert!(matches!(parse_number("42"), Some(NumberType::Int(num)) if num == int("42")));
        assert!(matches!(parse_number(" -7 "), Some(NumberType::Int(num)) if num == int("-7")));
        assert!(matches!(parse_number("+5"), Some(NumberType::Int(num)) if num == int("5")));
        assert!(matches!(parse_number("3.0"), Some(NumberType::Float(_))));
        assert!(matches!(parse_number("1e3"), Some(NumberType::Float(_))));
        assert!(parse_number("abc").is_none());
        assert!(parse_number("").is_none());
    }

    #[test]
    fn integers_have_no_width_limit() {
        let big = "123456789012345678901234567890";

        assert!(matches!(parse_number(big), Some(NumberType::Int(num)) if num.to_string() == big));
    }

    #[test]
    fn digit_separators() {
        assert!(matches!(parse_number("1_000"), Some(NumberType::Int(num)) if num == int("1000")));
        assert_eq!(parse_float("1_000.2_5"), Some(1000.25));
        assert!(parse_number("_1").is_none());
        assert!(parse_number("1_").is_none());
        assert!(parse_number("1__0").is_none());
        assert!(parse_number("1_.5").is_none());
    }

    #[test]
    fn ints_read_through_floats() {
        assert_eq!(parse_int("3.9"), Some(int("3")));
        assert_eq!(parse_int("-3.9"), Some(int("-3")));
        assert_eq!(parse_int("12"), Some(int("12")));
        assert_eq!(parse_int("1e30"), Some(int("1000000000000000019884624838656")));
        assert_eq!(parse_int("inf"), None);
        assert_eq!(parse_int("nan"), None);
    }

    #[test]
    fn booleans_are_case_sensitive() {
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("true"), None);
        assert_eq!(parse_bool("1"), None);
    }

    #[test]
    fn mixed_numbers_compare_by_value() {
        assert!(NumberType::Int(int("2")) == NumberType::Float(2.0));
        assert!(NumberType::Int(int("2")) < NumberType::Float(2.5));
        assert!(NumberType::Int(int("-2")) > NumberType::Float(-2.5));
        assert!(NumberType::Float(1e300) < NumberType::Int(BigInt::from(10).pow(301)));
        assert!(NumberType::Int(int("9007199254740993")) > NumberType::Float(9007199254740992.0));
        assert!(NumberType::Int(int("1")) < NumberType::Float(f64::INFINITY));
        assert!(NumberType::Int(int("1")).partial_cmp(&NumberType::Float(f64::NAN)).is_none());
    }

    #[test]
    fn huge_integers_do_not_widen() {
        let huge = NumberType::Int(BigInt::from(10).pow(400));

        assert_eq!(huge.as_float(), None);
        assert!(huge.combine(&NumberType::Float(1.0), |a, b| a + b, |a, b| a + b).is_none());
    }

    #[test]
    fn formats_floats() {
        assert_eq!(format_float(5.0), "5.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn converts_back_to_values() {
        assert_eq!(true.to_value(), "True");
        assert_eq!(NumberType::Int(int("5")).to_value(), "5");
        assert_eq!(NumberType::Float(5.0).to_value(), "5.0");
    }
}
