//! Literal Parser
//!
//! Parses the value half of a parameter token: numbers, `True`/`False`/`None`,
//! quoted strings, tuples and lists. The spellings `nan`, `inf` and `-inf`
//! are accepted (case-insensitively) as whole values only.

use crate::error::CodecError;
use crate::value::ParamValue;

/// Parse one value literal
pub fn parse_value(raw: &str) -> Result<ParamValue, CodecError> {
    match raw.to_ascii_lowercase().as_str() {
        "nan" => return Ok(ParamValue::Float(f64::NAN)),
        "-inf" => return Ok(ParamValue::Float(f64::NEG_INFINITY)),
        "inf" => return Ok(ParamValue::Float(f64::INFINITY)),
        _ => {}
    }

    let mut parser = Parser::new(raw);
    let value = parser
        .value()
        .map_err(|reason| invalid(raw, reason))?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(invalid(raw, format!("unexpected trailing input at offset {}", parser.pos)));
    }
    Ok(value)
}

fn invalid(raw: &str, reason: impl Into<String>) -> CodecError {
    CodecError::InvalidLiteral {
        literal: raw.to_string(),
        reason: reason.into(),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn value(&mut self) -> Result<ParamValue, String> {
        self.skip_ws();
        match self.peek() {
            None => Err("empty value".to_string()),
            Some('(') => self.tuple(),
            Some('[') => self.list(),
            Some(q @ ('"' | '\'')) => self.string(q),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.keyword(),
            Some(c) => Err(format!("unexpected character {:?}", c)),
        }
    }

    /// Comma separated items up to `close`; reports whether a trailing comma was seen
    fn items(&mut self, close: char) -> Result<(Vec<ParamValue>, bool), String> {
        let mut items = Vec::new();
        let mut trailing_comma = false;
        loop {
            self.skip_ws();
            if self.peek() == Some(close) {
                self.bump();
                return Ok((items, trailing_comma));
            }
            items.push(self.value()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => trailing_comma = true,
                Some(c) if c == close => return Ok((items, false)),
                Some(c) => return Err(format!("expected ',' or {:?}, found {:?}", close, c)),
                None => return Err(format!("missing closing {:?}", close)),
            }
        }
    }

    fn tuple(&mut self) -> Result<ParamValue, String> {
        self.bump();
        let (mut items, trailing_comma) = self.items(')')?;
        // "(x)" is a parenthesised value, "(x,)" a one-element tuple
        if items.len() == 1 && !trailing_comma {
            return Ok(items.remove(0));
        }
        Ok(ParamValue::Tuple(items))
    }

    fn list(&mut self) -> Result<ParamValue, String> {
        self.bump();
        let (items, _) = self.items(']')?;
        Ok(ParamValue::List(items))
    }

    fn string(&mut self, quote: char) -> Result<ParamValue, String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err("unterminated string".to_string()),
                Some(c) if c == quote => return Ok(ParamValue::Str(out)),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('0') => out.push('\0'),
                    Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => return Err("unterminated string".to_string()),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Result<ParamValue, String> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
            self.skip_ws();
        }
        let sign = self.src[start..self.pos].trim();
        let digits_start = self.pos;

        let mut is_float = false;
        let mut seen_digit = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => seen_digit = true,
                '.' if !is_float => is_float = true,
                'e' | 'E' if seen_digit => {
                    is_float = true;
                    self.bump();
                    if matches!(self.peek(), Some('-' | '+')) {
                        self.bump();
                    }
                    continue;
                }
                _ => break,
            }
            self.bump();
        }

        if !seen_digit {
            return Err(format!("malformed number {:?}", &self.src[start..self.pos]));
        }

        let text = format!("{}{}", sign, &self.src[digits_start..self.pos]);
        if is_float {
            text.parse::<f64>()
                .map(ParamValue::Float)
                .map_err(|e| format!("malformed float {:?}: {}", text, e))
        } else {
            text.parse::<i64>()
                .map(ParamValue::Int)
                .map_err(|e| format!("malformed integer {:?}: {}", text, e))
        }
    }

    fn keyword(&mut self) -> Result<ParamValue, String> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "True" => Ok(ParamValue::Bool(true)),
            "False" => Ok(ParamValue::Bool(false)),
            "None" => Ok(ParamValue::None),
            other => Err(format!("unknown name {:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_numbers() {
        assert_eq!(parse_value("3").unwrap(), ParamValue::Int(3));
        assert_eq!(parse_value("-1").unwrap(), ParamValue::Int(-1));
        assert_eq!(parse_value("0.1").unwrap(), ParamValue::Float(0.1));
        assert_eq!(parse_value("0.").unwrap(), ParamValue::Float(0.0));
        assert_eq!(parse_value(".5").unwrap(), ParamValue::Float(0.5));
        assert_eq!(parse_value("1e+16").unwrap(), ParamValue::Float(1e16));
        assert_eq!(parse_value("1.5e-05").unwrap(), ParamValue::Float(1.5e-5));
        assert_eq!(parse_value("1000000000000.0").unwrap(), ParamValue::Float(1e12));
    }

    #[test]
    fn test_special_floats() {
        assert!(matches!(parse_value("nan").unwrap(), ParamValue::Float(v) if v.is_nan()));
        assert!(matches!(parse_value("NaN").unwrap(), ParamValue::Float(v) if v.is_nan()));
        assert_eq!(parse_value("inf").unwrap(), ParamValue::Float(f64::INFINITY));
        assert_eq!(parse_value("-INF").unwrap(), ParamValue::Float(f64::NEG_INFINITY));
    }

    #[test]
    fn test_keywords_and_strings() {
        assert_eq!(parse_value("True").unwrap(), ParamValue::Bool(true));
        assert_eq!(parse_value("False").unwrap(), ParamValue::Bool(false));
        assert_eq!(parse_value("None").unwrap(), ParamValue::None);
        assert_eq!(parse_value("\"mean\"").unwrap(), ParamValue::from("mean"));
        assert_eq!(parse_value("'var'").unwrap(), ParamValue::from("var"));
        assert_eq!(parse_value(r#""a\"b""#).unwrap(), ParamValue::from("a\"b"));
    }

    #[test]
    fn test_composites() {
        assert_eq!(
            parse_value("(2, 5, 10, 20)").unwrap(),
            ParamValue::Tuple(vec![2.into(), 5.into(), 10.into(), 20.into()])
        );
        assert_eq!(parse_value("(1,)").unwrap(), ParamValue::Tuple(vec![1.into()]));
        assert_eq!(parse_value("()").unwrap(), ParamValue::Tuple(vec![]));
        assert_eq!(parse_value("(7)").unwrap(), ParamValue::Int(7));
        assert_eq!(
            parse_value("[1, 'a', (True,)]").unwrap(),
            ParamValue::List(vec![
                1.into(),
                "a".into(),
                ParamValue::Tuple(vec![true.into()]),
            ])
        );
    }

    #[test]
    fn test_rejects_garbage() {
        for raw in ["", "mean", "1.2.3", "(1, 2", "'open", "1 2", "--", "true", "(nan,)"] {
            assert!(
                matches!(parse_value(raw), Err(CodecError::InvalidLiteral { .. })),
                "{:?} should not parse",
                raw
            );
        }
    }

    proptest! {
        #[test]
        fn prop_rendered_floats_parse_back(v in proptest::num::f64::ANY) {
            let rendered = ParamValue::Float(v).to_string();
            prop_assert_eq!(parse_value(&rendered).unwrap(), ParamValue::Float(v));
        }

        #[test]
        fn prop_rendered_ints_parse_back(v in any::<i64>()) {
            let rendered = ParamValue::Int(v).to_string();
            prop_assert_eq!(parse_value(&rendered).unwrap(), ParamValue::Int(v));
        }

        #[test]
        fn prop_rendered_strings_parse_back(s in "[a-z0-9 ]{0,12}") {
            let rendered = ParamValue::Str(s.clone()).to_string();
            prop_assert_eq!(parse_value(&rendered).unwrap(), ParamValue::Str(s));
        }
    }
}
