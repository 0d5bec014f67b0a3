//! Whitespace-delimited token reading over any buffered input.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Returned for a token that is not a valid integer selection.
pub const INVALID_SELECTION: i32 = -1;

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads a menu selection. A non-integer token is consumed and reported
    /// as [`INVALID_SELECTION`].
    pub fn read_selection(&mut self) -> io::Result<Option<i32>> {
        Ok(self
            .next_token()?
            .map(|token| token.parse().unwrap_or(INVALID_SELECTION)))
    }

    /// Reads an amount. Non-numeric and non-finite tokens are consumed and
    /// returned as `None` inside `Some`, so callers can tell them from end of input.
    pub fn read_amount(&mut self) -> io::Result<Option<Option<f64>>> {
        Ok(self.next_token()?.map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|amount| amount.is_finite())
        }))
    }
}
