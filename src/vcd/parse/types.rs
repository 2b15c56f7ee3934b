// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::num::ParseIntError;

use num::BigUint;

use super::super::signal::SignalType;

#[derive(Debug, PartialEq)]
pub(super) struct TakeResult<'a> {
    pub(super) matched: &'a str,
    pub(super) residual: &'a str,
}

/// The fields of a `$var` line that the signal table keeps.
#[derive(Debug, PartialEq)]
pub(super) struct Declaration<'a> {
    pub(super) signal_type: SignalType,
    pub(super) num_bits: u32,
    pub(super) id: &'a str,
    pub(super) name: &'a str,
}

/// What a single trimmed line of vcd text turned out to be.
#[derive(Debug, PartialEq)]
pub(super) enum LineKind<'a> {
    Blank,
    Declaration(Declaration<'a>),
    EndDefinitions,
    /// Any other `$` keyword line, e.g. `$scope`, `$date` or a lone `$end`.
    Command {
        keyword: &'a str,
        rest: &'a str,
    },
    /// `#<time>`. Decoding errors only matter once the header is over.
    Timestamp(Result<u64, ParseIntError>),
    VectorChange {
        value: BigUint,
        id: &'a str,
    },
    ScalarChange {
        value: BigUint,
        id: &'a str,
    },
    Unmatched,
}
