// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::io;
use std::io::prelude::*;

/// 1-based line number within the vcd input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Line(pub(super) usize);

pub(super) struct LineReader<R: io::Read> {
    reader: io::BufReader<R>,
    eof: bool,
    buffer: String,
    curr_line: usize,
}

impl<R: io::Read> LineReader<R> {
    pub(super) fn new(file: R) -> LineReader<R> {
        let reader = io::BufReader::new(file);
        LineReader {
            reader,
            eof: false,
            buffer: String::new(),
            curr_line: 0,
        }
    }

    /// Returns the next line with surrounding whitespace trimmed, or `None`
    /// once the input is exhausted. Blank lines are returned as empty strings
    /// so that line numbers stay accurate.
    pub(super) fn next_line(&mut self) -> io::Result<Option<(&str, Line)>> {
        if self.eof {
            return Ok(None);
        }

        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            self.eof = true;
            return Ok(None);
        }

        self.curr_line += 1;
        Ok(Some((self.buffer.trim(), Line(self.curr_line))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_counts_lines() {
        let text = "  $var wire 1 ! clk $end \r\n\n#5\n";
        let mut reader = LineReader::new(text.as_bytes());

        let mut seen = vec![];
        while let Some((line, cursor)) = reader.next_line().unwrap() {
            seen.push((line.to_string(), cursor));
        }

        assert_eq!(
            seen,
            vec![
                ("$var wire 1 ! clk $end".to_string(), Line(1)),
                ("".to_string(), Line(2)),
                ("#5".to_string(), Line(3)),
            ]
        );
        assert!(reader.next_line().unwrap().is_none());
    }

    #[test]
    fn last_line_without_newline() {
        let mut reader = LineReader::new("1!".as_bytes());
        let (line, cursor) = reader.next_line().unwrap().unwrap();
        assert_eq!((line, cursor), ("1!", Line(1)));
        assert!(reader.next_line().unwrap().is_none());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = &[b'#', 0xff, 0xfe, b'\n'];
        let mut reader = LineReader::new(bytes);
        assert!(reader.next_line().is_err());
    }
}
