// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::collections::HashMap;

use chrono::prelude::*;
use num::BigUint;

use super::signal::Signal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timescale {
    Fs,
    Ps,
    Ns,
    Us,
    Ms,
    S,
    Unit,
}

impl Timescale {
    pub(super) fn from_unit(unit: &str) -> Option<Timescale> {
        match unit {
            "fs" => Some(Timescale::Fs),
            "ps" => Some(Timescale::Ps),
            "ns" => Some(Timescale::Ns),
            "us" => Some(Timescale::Us),
            "ms" => Some(Timescale::Ms),
            "s" => Some(Timescale::S),
            _ => None,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Timescale::Fs => "fs",
            Timescale::Ps => "ps",
            Timescale::Ns => "ns",
            Timescale::Us => "us",
            Timescale::Ms => "ms",
            Timescale::S => "s",
            Timescale::Unit => "unit",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub date: Option<DateTime<Utc>>,
    pub version: Option<Version>,
    pub timescale: (Option<u32>, Timescale),
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            date: None,
            version: None,
            timescale: (None, Timescale::Unit),
        }
    }
}

/// Position of a signal in declaration order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SignalIdx(pub usize);

/// The parsed signal table.
///
/// Signals are stored in declaration order and looked up by the identifier
/// the simulator gave them through `signal_map`.
#[derive(Debug, Clone, PartialEq)]
pub struct VCD {
    pub(super) metadata: Metadata,
    pub(super) all_signals: Vec<Signal>,
    pub(super) signal_map: HashMap<String, SignalIdx>,
}

impl VCD {
    pub(super) fn new(metadata: Metadata) -> VCD {
        VCD {
            metadata,
            all_signals: vec![],
            signal_map: HashMap::new(),
        }
    }

    /// Adds a freshly declared signal. Redeclaring an id replaces the earlier
    /// signal, history included, but keeps its place in declaration order.
    pub(super) fn declare(&mut self, signal: Signal) -> SignalIdx {
        match self.signal_map.get(signal.id()) {
            Some(&SignalIdx(idx)) => {
                self.all_signals[idx] = signal;
                SignalIdx(idx)
            }
            None => {
                let signal_idx = SignalIdx(self.all_signals.len());
                self.signal_map.insert(signal.id().to_string(), signal_idx);
                self.all_signals.push(signal);
                signal_idx
            }
        }
    }

    /// Appends an observation to the signal declared under `id`. Returns
    /// false when no such signal exists.
    pub(super) fn record(&mut self, id: &str, time: u64, value: BigUint) -> bool {
        match self.signal_map.get(id) {
            Some(&SignalIdx(idx)) => {
                self.all_signals[idx].push_observation(time, value);
                true
            }
            None => false,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.all_signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_signals.is_empty()
    }

    /// Signals in declaration order.
    pub fn signals(&self) -> impl Iterator<Item = &Signal> + '_ {
        self.all_signals.iter()
    }

    pub fn signal_by_idx(&self, idx: SignalIdx) -> Option<&Signal> {
        let SignalIdx(idx) = idx;
        self.all_signals.get(idx)
    }

    pub fn signal_by_id(&self, id: &str) -> Option<&Signal> {
        self.signal_map
            .get(id)
            .and_then(|idx| self.signal_by_idx(*idx))
    }

    /// First signal in declaration order carrying `name`.
    pub fn signal_by_name(&self, name: &str) -> Option<&Signal> {
        self.all_signals.iter().find(|signal| signal.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::super::signal::SignalType;
    use super::*;

    fn wire(id: &str, name: &str, num_bits: u32) -> Signal {
        Signal::new(id.into(), name.into(), SignalType::Wire, num_bits)
    }

    #[test]
    fn redeclaration_replaces_in_place() {
        let mut vcd = VCD::new(Metadata::default());
        vcd.declare(wire("!", "clk", 1));
        vcd.declare(wire("\"", "reset", 1));
        assert!(vcd.record("!", 3, BigUint::from(1u8)));

        let idx = vcd.declare(wire("!", "counter", 8));

        assert_eq!(idx, SignalIdx(0));
        assert_eq!(vcd.len(), 2);
        let names: Vec<&str> = vcd.signals().map(|s| s.name()).collect();
        assert_eq!(names, vec!["counter", "reset"]);
        let counter = vcd.signal_by_id("!").unwrap();
        assert_eq!(counter.num_bits(), 8);
        assert!(counter.times().is_empty());
    }

    #[test]
    fn record_unknown_id() {
        let mut vcd = VCD::new(Metadata::default());
        vcd.declare(wire("!", "clk", 1));
        assert!(!vcd.record("$", 0, BigUint::from(1u8)));
        assert!(vcd.signal_by_id("$").is_none());
        assert!(vcd.signal_by_name("clk").is_some());
    }

    #[test]
    fn timescale_units() {
        assert_eq!(Timescale::from_unit("ns"), Some(Timescale::Ns));
        assert_eq!(Timescale::from_unit("ks"), None);
        assert_eq!(Timescale::Ps.unit(), "ps");
    }
}
