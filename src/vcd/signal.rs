// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use num::BigUint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalType {
    Event,
    Integer,
    Parameter,
    Real,
    RealTime,
    Reg,
    Str,
    Supply0,
    Supply1,
    Time,
    Tri,
    TriAnd,
    TriOr,
    TriReg,
    Tri0,
    Tri1,
    WAnd,
    Wire,
    WOr,
    SVInt,
    SVShortInt,
    SVLongInt,
    SVChar,
    SVLogic,
    SVBit,
    SVShortReal,
    // Simulator dialects invent their own var types; keep the keyword
    // instead of rejecting the declaration.
    Other(String),
}

impl SignalType {
    pub(super) fn from_keyword(word: &str) -> SignalType {
        match word {
            "event" => SignalType::Event,
            "integer" => SignalType::Integer,
            "parameter" => SignalType::Parameter,
            "real" => SignalType::Real,
            "realtime" => SignalType::RealTime,
            "reg" => SignalType::Reg,
            "string" => SignalType::Str,
            "supply0" => SignalType::Supply0,
            "supply1" => SignalType::Supply1,
            "time" => SignalType::Time,
            "tri" => SignalType::Tri,
            "triand" => SignalType::TriAnd,
            "trior" => SignalType::TriOr,
            "trireg" => SignalType::TriReg,
            "tri0" => SignalType::Tri0,
            "tri1" => SignalType::Tri1,
            "wand" => SignalType::WAnd,
            "wire" => SignalType::Wire,
            "wor" => SignalType::WOr,
            "int" => SignalType::SVInt,
            "int_s" | "shortint" => SignalType::SVShortInt,
            "int_l" | "longint" => SignalType::SVLongInt,
            "byte" | "char" => SignalType::SVChar,
            "logic" => SignalType::SVLogic,
            "bit" => SignalType::SVBit,
            "shortreal" => SignalType::SVShortReal,
            other => SignalType::Other(other.to_string()),
        }
    }
}

/// One declared signal and every value change recorded for it.
///
/// `times` and `values` are index-aligned: the value at `values[i]` was
/// observed at `times[i]`. Times never decrease; several changes may share a
/// timestamp and are kept in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) signal_type: SignalType,
    pub(super) num_bits: u32,
    pub(super) times: Vec<u64>,
    pub(super) values: Vec<BigUint>,
}

impl Signal {
    pub(super) fn new(id: String, name: String, signal_type: SignalType, num_bits: u32) -> Signal {
        Signal {
            id,
            name,
            signal_type,
            num_bits,
            times: vec![],
            values: vec![],
        }
    }

    pub(super) fn push_observation(&mut self, time: u64, value: BigUint) {
        self.times.push(time);
        self.values.push(value);
    }

    /// The short identifier the simulator assigned to this signal.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signal_type(&self) -> &SignalType {
        &self.signal_type
    }

    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }

    pub fn times(&self) -> &[u64] {
        &self.times
    }

    pub fn values(&self) -> &[BigUint] {
        &self.values
    }

    /// Observations as `(time, value)` pairs in file order.
    pub fn observations(&self) -> impl Iterator<Item = (u64, &BigUint)> + '_ {
        self.times.iter().copied().zip(self.values.iter())
    }
}
