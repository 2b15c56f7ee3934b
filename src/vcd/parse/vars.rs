// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

/// part of the vcd parser that turns `$var` lines into signal declarations
use log::warn;

use super::super::reader::Line;
use super::super::signal::SignalType;
use super::types::Declaration;

/// Decodes the words following `$var`. Returns `None` for lines the signal
/// table cannot use; those are skipped rather than treated as errors.
pub(super) fn parse_var<'a>(fields: &'a str, cursor: Line) -> Option<Declaration<'a>> {
    let mut words = fields.split_ascii_whitespace();

    // $var wire 8 ! counter [7:0] $end
    //      ^^^^ ^ ^ ^^^^^^^ - only these four are read, the bit range and
    //                         anything else up to `$end` is ignored
    let (Some(var_type), Some(size), Some(id), Some(name)) =
        (words.next(), words.next(), words.next(), words.next())
    else {
        warn!("skipping `$var` with too few fields on {cursor:?}");
        return None;
    };

    let num_bits = match size.parse::<u32>() {
        Ok(num_bits) if num_bits > 0 => num_bits,
        _ => {
            warn!("skipping `$var {var_type} {size} {id} {name}`: size is not a positive integer on {cursor:?}");
            return None;
        }
    };

    Some(Declaration {
        signal_type: SignalType::from_keyword(var_type),
        num_bits,
        id,
        name,
    })
}
