// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

mod vcd;
pub use vcd::error::VcdError;
pub use vcd::parse::{parse_vcd, parse_vcd_file, parse_vcd_str};
pub use vcd::signal::{Signal, SignalType};
pub use vcd::types::{Metadata, SignalIdx, Timescale, Version, VCD};
pub use vcd::utilities::LookupErrors;

pub mod analysis;

pub use num::BigUint;
