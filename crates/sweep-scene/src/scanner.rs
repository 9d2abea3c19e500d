//! Whitespace-delimited scanner over scene text.
//!
//! Reads words, single delimiter characters and numbers the way a formatted
//! stream extraction would: leading whitespace is skipped and a number stops
//! at the first character that cannot continue it, so `(1` and `2)` split
//! into delimiter/number pairs without surrounding spaces.

use sweep_core::{Result, SweepError};

pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// 1-based line of the next unread character.
    pub fn line(&self) -> usize {
        self.line
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            if bytes[self.pos] == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn error(&self, message: String) -> SweepError {
        SweepError::Parse {
            line: self.line,
            message,
        }
    }

    /// Next run of non-whitespace characters, or `None` at end of input.
    pub fn word(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let len = rest
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        self.pos += len;
        Some(&rest[..len])
    }

    pub fn expect_word(&mut self, what: &str) -> Result<&'a str> {
        self.word()
            .ok_or_else(|| self.error(format!("expected {what}, found end of input")))
    }

    /// Consume one non-whitespace character, whatever it is.
    pub fn delimiter(&mut self) -> Result<char> {
        self.skip_whitespace();
        let c = self.input[self.pos..]
            .chars()
            .next()
            .ok_or_else(|| self.error("expected delimiter, found end of input".into()))?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    /// Length of the longest numeric prefix at the cursor.
    fn number_len(&self, allow_fraction: bool) -> usize {
        let bytes = &self.input.as_bytes()[self.pos..];
        let mut i = 0;
        if i < bytes.len() && (bytes[i] == b'+' || (allow_fraction && bytes[i] == b'-')) {
            i += 1;
        }
        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let mut digits = i - int_start;
        if !allow_fraction {
            return if digits == 0 { 0 } else { i };
        }
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            let frac_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            digits += i - frac_start;
        }
        if digits == 0 {
            return 0;
        }
        // Exponent only counts when digits follow it
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            let mut j = i + 1;
            if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                j += 1;
            }
            let exp_start = j;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > exp_start {
                i = j;
            }
        }
        i
    }

    fn numeric_text(&mut self, what: &str, allow_fraction: bool) -> Result<&'a str> {
        self.skip_whitespace();
        let len = self.number_len(allow_fraction);
        if len == 0 {
            let found = self.input[self.pos..]
                .split_ascii_whitespace()
                .next()
                .unwrap_or("end of input");
            return Err(self.error(format!("expected {what}, found '{found}'")));
        }
        let text = &self.input[self.pos..self.pos + len];
        self.pos += len;
        Ok(text)
    }

    pub fn real(&mut self, what: &str) -> Result<f64> {
        let text = self.numeric_text(what, true)?;
        text.parse()
            .map_err(|e| self.error(format!("invalid {what} '{text}': {e}")))
    }

    pub fn unsigned(&mut self, what: &str) -> Result<u32> {
        let text = self.numeric_text(what, false)?;
        text.parse()
            .map_err(|e| self.error(format!("invalid {what} '{text}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_lines() {
        let mut s = Scanner::new("bez2 arc\n  10");
        assert_eq!(s.word(), Some("bez2"));
        assert_eq!(s.word(), Some("arc"));
        assert_eq!(s.line(), 1);
        assert_eq!(s.unsigned("steps").unwrap(), 10);
        assert_eq!(s.line(), 2);
        assert_eq!(s.word(), None);
    }

    #[test]
    fn test_attached_delimiters() {
        let mut s = Scanner::new("[-1.5 2e1] (3 .25)");
        assert_eq!(s.delimiter().unwrap(), '[');
        assert_eq!(s.real("x").unwrap(), -1.5);
        assert_eq!(s.real("y").unwrap(), 20.0);
        assert_eq!(s.delimiter().unwrap(), ']');
        assert_eq!(s.delimiter().unwrap(), '(');
        assert_eq!(s.real("x").unwrap(), 3.0);
        assert_eq!(s.real("y").unwrap(), 0.25);
        assert_eq!(s.delimiter().unwrap(), ')');
    }

    #[test]
    fn test_exponent_without_digits_is_not_consumed() {
        let mut s = Scanner::new("4e)");
        assert_eq!(s.real("x").unwrap(), 4.0);
        assert_eq!(s.word(), Some("e)"));
    }

    #[test]
    fn test_unsigned_rejects_sign_and_fraction() {
        assert!(Scanner::new("-3").unsigned("count").is_err());
        let mut s = Scanner::new("3.5");
        assert_eq!(s.unsigned("count").unwrap(), 3);
        assert_eq!(s.word(), Some(".5"));
    }

    #[test]
    fn test_errors_carry_line() {
        let mut s = Scanner::new("\n\nfoo");
        match s.real("radius").unwrap_err() {
            SweepError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert_eq!(message, "expected radius, found 'foo'");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(
            Scanner::new("   ").delimiter(),
            Err(SweepError::Parse { .. })
        ));
    }
}
