// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

//! Consistency check for the blinking-counter testbench: a multi-bit
//! `counter` register whose most significant bit drives a `blink` output.

use std::fmt;

use num::{BigUint, One};

use crate::{Signal, VCD};

/// Widths above this print the counter range symbolically instead of
/// materialising `2^width - 1`.
const MAX_EXACT_RANGE_BITS: u32 = 128;

#[derive(Debug, Clone, PartialEq)]
pub struct BlinkReport {
    pub name: String,
    pub transitions: usize,
    /// Samples where blink disagrees with the counter MSB. `None` when the
    /// two signals were not sampled the same number of times, in which case
    /// their values cannot be paired up.
    pub msb_mismatches: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterReport {
    pub name: String,
    pub num_bits: u32,
    /// `2^num_bits - 1`, `None` for counters wider than
    /// `MAX_EXACT_RANGE_BITS`.
    pub max_representable: Option<BigUint>,
    /// Smallest and largest value seen, `None` if the counter never changed.
    pub observed_range: Option<(BigUint, BigUint)>,
    pub changes: usize,
    pub blink: Option<BlinkReport>,
    pub reset: Option<String>,
}

/// Looks for the counter, blink and reset signals by name and checks that
/// blink follows the counter's top bit.
///
/// Returns `None` when no multi-bit signal named like a counter exists.
pub fn analyze_counter(vcd: &VCD) -> Option<CounterReport> {
    let mut counter: Option<&Signal> = None;
    let mut blink: Option<&Signal> = None;
    let mut reset: Option<&Signal> = None;

    // later declarations win, each signal is given at most one role
    for signal in vcd.signals() {
        let name = signal.name().to_lowercase();
        if name.contains("counter") && signal.num_bits() > 1 {
            counter = Some(signal);
        } else if name.contains("blink") {
            blink = Some(signal);
        } else if name.contains("reset") {
            reset = Some(signal);
        }
    }

    let counter = counter?;
    let num_bits = counter.num_bits();
    let max_representable = (num_bits <= MAX_EXACT_RANGE_BITS)
        .then(|| (BigUint::one() << num_bits as usize) - BigUint::one());
    // value >= 2^(num_bits - 1) exactly when it needs at least num_bits bits
    let msb_set = |value: &BigUint| value.bits() >= u64::from(num_bits);

    let observed_range = counter
        .values()
        .iter()
        .min()
        .zip(counter.values().iter().max())
        .map(|(min, max)| (min.clone(), max.clone()));

    let blink = blink.map(|blink| {
        let msb_mismatches = (counter.values().len() == blink.values().len()).then(|| {
            counter
                .values()
                .iter()
                .zip(blink.values())
                .filter(|(counter_val, blink_val)| {
                    let expected = u8::from(msb_set(*counter_val));
                    **blink_val != BigUint::from(expected)
                })
                .count()
        });

        BlinkReport {
            name: blink.name().to_string(),
            transitions: blink.values().windows(2).filter(|w| w[0] != w[1]).count(),
            msb_mismatches,
        }
    });

    Some(CounterReport {
        name: counter.name().to_string(),
        num_bits,
        max_representable,
        observed_range,
        changes: counter.values().len(),
        blink,
        reset: reset.map(|reset| reset.name().to_string()),
    })
}

impl fmt::Display for CounterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Counter signal: {} ({} bits)", self.name, self.num_bits)?;
        match &self.max_representable {
            Some(max) => writeln!(f, "Counter range: 0 to {max}")?,
            None => writeln!(f, "Counter range: 0 to 2^{}-1", self.num_bits)?,
        }
        if let Some((min, max)) = &self.observed_range {
            writeln!(f, "Counter values seen: {min} to {max}")?;
            writeln!(f, "Total counter changes: {}", self.changes)?;
        }
        if let Some(reset) = &self.reset {
            writeln!(f, "Reset signal: {reset}")?;
        }
        if let Some(blink) = &self.blink {
            writeln!(f, "Blink signal: {}", blink.name)?;
            writeln!(f, "Blink transitions: {}", blink.transitions)?;
            match blink.msb_mismatches {
                Some(0) => writeln!(f, "Blink signal correctly follows counter MSB")?,
                Some(errors) => writeln!(f, "Found {errors} blink signal errors")?,
                None => writeln!(
                    f,
                    "Blink and counter were sampled a different number of times, MSB check skipped"
                )?,
            }
        }
        Ok(())
    }
}
