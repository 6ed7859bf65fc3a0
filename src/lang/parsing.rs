use crate::lang::{
    code::{Word, WordList},
    tokenizing::{Sigil, Token, TokenText, tokenize_from_source},
};
use std::{iter::Peekable, str::Chars};

/// Read exactly `count` hex digits and convert them to a character.  The iterator is only advanced
/// if all of the digits are there and they form a valid character.
fn process_hex_literal(chars: &mut Peekable<Chars>, count: usize) -> Option<char> {
    let mut lookahead = chars.clone();
    let mut number_str = String::with_capacity(count);

    for _ in 0..count {
        match lookahead.next() {
            Some(next) if next.is_ascii_hexdigit() => number_str.push(next),
            _ => return None,
        }
    }

    let character = u32::from_str_radix(&number_str, 16).ok().and_then(char::from_u32)?;

    *chars = lookahead;
    Some(character)
}

/// Read an octal literal of up to three digits, the first of which has already been consumed.
fn process_octal_literal(first: char, chars: &mut Peekable<Chars>) -> Option<char> {
    let mut number_str = String::from(first);

    while number_str.len() < 3
        && let Some(next) = chars.peek()
        && ('0'..='7').contains(next)
    {
        number_str.push(*next);
        let _ = chars.next();
    }

    u32::from_str_radix(&number_str, 8).ok().and_then(char::from_u32)
}

/// Decode the escape sequences of a quoted token.
///
/// Handles the single character escapes `\n \t \r \\ \" \' \a \b \f \v`, octal escapes of up to
/// three digits, `\xHH`, `\uHHHH` and `\UHHHHHHHH`.  Any other escape, or a numeric escape that is
/// malformed, is passed through untouched, backslash included.
pub fn decode_escapes(raw: &str) -> String {
    let mut chars = raw.chars().peekable();
    let mut text = String::with_capacity(raw.len());

    while let Some(next) = chars.next() {
        if next != '\\' {
            text.push(next);
            continue;
        }

        let Some(escaped) = chars.next() else {
            text.push('\\');
            break;
        };

        let decoded = match escaped {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '\\' => Some('\\'),
            '"' => Some('"'),
            '\'' => Some('\''),
            'a' => Some('\u{07}'),
            'b' => Some('\u{08}'),
            'f' => Some('\u{0c}'),
            'v' => Some('\u{0b}'),
            '0'..='7' => process_octal_literal(escaped, &mut chars),
            'x' => process_hex_literal(&mut chars, 2),
            'u' => process_hex_literal(&mut chars, 4),
            'U' => process_hex_literal(&mut chars, 8),
            _ => None,
        };

        match decoded {
            Some(character) => text.push(character),
            None => {
                text.push('\\');
                text.push(escaped);
            }
        }
    }

    text
}

/// Convert a single token into its word.  Quoted text has its escapes decoded, bare text is used as
/// is.
pub fn parse_token(token: &Token) -> Word {
    let value = match &token.text {
        TokenText::Bare(text) => text.clone(),
        TokenText::Quoted(raw) => decode_escapes(raw),
    };

    match token.sigil {
        Sigil::None => Word::Literal(value),
        Sigil::Define => Word::Define(value),
        Sigil::Call => Word::Call(value),
    }
}

/// Convert a token list into a word list of the same length and order.
pub fn parse_tokens(tokens: &[Token]) -> WordList {
    tokens.iter().map(parse_token).collect()
}

/// Tokenize and parse source text in one go.  This is how both definitions and eval turn a string
/// from the stack into runnable words.
pub fn parse_source(path: &str, source: &str) -> WordList {
    parse_tokens(&tokenize_from_source(path, source))
}
