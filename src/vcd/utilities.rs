// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use num::BigUint;

use super::signal::Signal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupErrors {
    PreTimeline {
        desired_time: u64,
        timeline_start_time: u64,
    },
    EmptyTimeline,
}

/// Index of the observation in effect at `desired_time` on a non-decreasing
/// timeline: the last entry whose time is `<= desired_time`.
pub(super) fn ordered_binary_lookup(
    timeline: &[u64],
    desired_time: u64,
) -> Result<usize, LookupErrors> {
    // timeline must not be empty
    let timeline_start_time = *timeline.first().ok_or(LookupErrors::EmptyTimeline)?;

    // check if we're requesting a value that occurs before the recorded
    // start of the timeline
    if desired_time < timeline_start_time {
        return Err(LookupErrors::PreTimeline {
            desired_time,
            timeline_start_time,
        });
    }

    // log2(n) in the number of events on the timeline. Ties resolve to the
    // last change recorded at that time.
    let after = timeline.partition_point(|&time| time <= desired_time);
    Ok(after - 1)
}

impl Signal {
    /// Value the signal holds at `desired_time`. Times past the end of the
    /// timeline return the last recorded value.
    pub fn query_val_on_tmln(&self, desired_time: u64) -> Result<&BigUint, LookupErrors> {
        let idx = ordered_binary_lookup(&self.times, desired_time)?;
        Ok(&self.values[idx])
    }
}
