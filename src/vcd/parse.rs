// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, trace, warn};

use super::error::VcdError;
use super::reader::{Line, LineReader};
use super::signal::Signal;
use super::types::VCD;

mod combinator_atoms;
use combinator_atoms::first_token;

mod types;
use types::LineKind;

mod events;
use events::{parse_scalar_change, parse_timestamp, parse_vector_change};

mod metadata;
use metadata::MetadataCollector;

mod vars;
use vars::parse_var;

/// Transient state of one pass over the input.
#[derive(Debug)]
struct ParserState {
    current_time: u64,
    in_header: bool,
}

impl Default for ParserState {
    fn default() -> Self {
        ParserState {
            current_time: 0,
            in_header: true,
        }
    }
}

/// Decides what a trimmed line is, decoding its fields once.
fn classify_line(line: &str, cursor: Line) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(digits) = line.strip_prefix('#') {
        return LineKind::Timestamp(parse_timestamp(digits));
    }

    if line.starts_with('$') {
        if line.starts_with("$enddefinitions") {
            return LineKind::EndDefinitions;
        }
        let res = first_token(line);
        if res.matched == "$var" {
            return match parse_var(res.residual, cursor) {
                Some(declaration) => LineKind::Declaration(declaration),
                None => LineKind::Unmatched,
            };
        }
        return LineKind::Command {
            keyword: res.matched,
            rest: res.residual,
        };
    }

    if line.starts_with('b') {
        return parse_vector_change(line);
    }

    parse_scalar_change(line)
}

/// Applies one classified line to the table under construction.
fn apply_line(
    kind: LineKind<'_>,
    line: &str,
    cursor: Line,
    state: &mut ParserState,
    collector: &mut MetadataCollector,
    vcd: &mut VCD,
) -> Result<(), VcdError> {
    if state.in_header {
        // header text outside of declarations only feeds the metadata
        match &kind {
            LineKind::Declaration(_) | LineKind::EndDefinitions => collector.close(),
            LineKind::Command { keyword: "$end", .. } => {
                collector.feed(line);
                return Ok(());
            }
            LineKind::Command { keyword, rest } => {
                collector.begin(keyword, rest);
                return Ok(());
            }
            _ => {
                if collector.is_open() {
                    collector.feed(line);
                }
                return Ok(());
            }
        }
    }

    match kind {
        LineKind::Declaration(declaration) => {
            vcd.declare(Signal::new(
                declaration.id.to_string(),
                declaration.name.to_string(),
                declaration.signal_type,
                declaration.num_bits,
            ));
        }
        LineKind::EndDefinitions => {
            if state.in_header {
                debug!("end of declarations on {cursor:?}, {} signals", vcd.len());
            }
            state.in_header = false;
        }
        LineKind::Timestamp(time) => {
            let time = time.map_err(|source| VcdError::MalformedTimestamp {
                line: cursor.0,
                text: line.to_string(),
                source,
            })?;
            if time < state.current_time {
                // simulation time never runs backwards, keep the current one
                warn!(
                    "skipping `{line}` on {cursor:?}: earlier than current time #{}",
                    state.current_time
                );
            } else {
                state.current_time = time;
            }
        }
        LineKind::VectorChange { value, id } | LineKind::ScalarChange { value, id } => {
            if !vcd.record(id, state.current_time, value) {
                trace!("dropping change for undeclared id `{id}` on {cursor:?}");
            }
        }
        LineKind::Unmatched => trace!("skipping unrecognised line `{line}` on {cursor:?}"),
        LineKind::Blank | LineKind::Command { .. } => {}
    }

    Ok(())
}

/// Reads a whole vcd trace and rebuilds the history of every declared
/// signal.
///
/// Lines the parser does not understand are skipped, as are timestamps that
/// would move time backwards. Only unreadable input or a `#` timestamp that
/// is not a number abort the parse.
pub fn parse_vcd<R: io::Read>(file: R) -> Result<VCD, VcdError> {
    let mut line_reader = LineReader::new(file);
    let mut state = ParserState::default();
    let mut collector = MetadataCollector::default();
    let mut vcd = VCD::new(Default::default());

    while let Some((line, cursor)) = line_reader.next_line()? {
        let kind = classify_line(line, cursor);
        apply_line(kind, line, cursor, &mut state, &mut collector, &mut vcd)?;
    }

    if state.in_header {
        debug!("no $enddefinitions found, every line was treated as header");
    }
    vcd.metadata = collector.finish();
    debug!(
        "parsed {} signals, last timestamp #{}",
        vcd.len(),
        state.current_time
    );

    Ok(vcd)
}

/// Parses vcd text already held in memory.
pub fn parse_vcd_str(text: &str) -> Result<VCD, VcdError> {
    parse_vcd(text.as_bytes())
}

/// Opens and parses the vcd file at `path`.
pub fn parse_vcd_file<P: AsRef<Path>>(path: P) -> Result<VCD, VcdError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VcdError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vcd(file)
}
