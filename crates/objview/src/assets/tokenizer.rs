//! Line reader and tokenizer shared by the OBJ and MTL parsers
//!
//! Both formats are line oriented with whitespace-separated tokens, so the
//! parsers only ever see one [`Line`] at a time.

use std::io::{self, BufRead};

/// One non-empty line of a text asset, split into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the source
    pub number: usize,
    /// Whitespace-separated tokens with any trailing `#` comment removed
    pub tokens: Vec<String>,
}

impl Line {
    /// The directive keyword (first token)
    pub fn keyword(&self) -> &str {
        self.tokens.first().map_or("", String::as_str)
    }

    /// Tokens after the keyword
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

/// Split a line into whitespace-delimited tokens, dropping `#` comments
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .take_while(|token| !token.starts_with('#'))
        .collect()
}

/// Parse the first three arguments as floats
///
/// Extra trailing tokens are ignored. Returns `None` when fewer than three
/// parsable values are present.
pub fn parse_triple(args: &[String]) -> Option<[f32; 3]> {
    match args {
        [x, y, z, ..] => Some([x.parse().ok()?, y.parse().ok()?, z.parse().ok()?]),
        _ => None,
    }
}

/// Iterator over the non-empty lines of a reader
///
/// Invalid UTF-8 is decoded lossily so a single bad byte does not end the
/// parse. Blank and comment-only lines are skipped but still counted.
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.line_number += 1;

            let text = String::from_utf8_lossy(&self.buffer);
            let tokens: Vec<String> = tokenize(&text).into_iter().map(str::to_owned).collect();
            if tokens.is_empty() {
                continue;
            }

            return Some(Ok(Line {
                number: self.line_number,
                tokens,
            }));
        }
    }
}
