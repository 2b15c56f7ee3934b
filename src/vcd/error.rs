// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

//! Errors that abort a parse.
//!
//! Everything else the parser runs into (short declarations, unknown ids,
//! undecodable vector digits) is skipped rather than reported, so this enum
//! stays small.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VcdError {
    /// The underlying reader failed, including on invalid UTF-8.
    #[error("failed to read vcd input: {0}")]
    Io(#[from] io::Error),

    #[error("failed to open vcd file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `#` line after `$enddefinitions` whose suffix is not a time.
    #[error("malformed timestamp `{text}` on line {line}: {source}")]
    MalformedTimestamp {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_timestamp_display() {
        let source = "1x".parse::<u64>().unwrap_err();
        let e = VcdError::MalformedTimestamp {
            line: 12,
            text: "#1x".into(),
            source,
        };
        assert!(e
            .to_string()
            .starts_with("malformed timestamp `#1x` on line 12: "));
    }

    #[test]
    fn open_display() {
        let e = VcdError::Open {
            path: PathBuf::from("waves/missing.vcd"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            e.to_string(),
            "failed to open vcd file waves/missing.vcd: file not found"
        );
    }

    #[test]
    fn io_display() {
        let e = VcdError::from(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        assert!(e.to_string().contains("failed to read vcd input"));
    }
}
