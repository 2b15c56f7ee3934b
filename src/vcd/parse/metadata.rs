// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use chrono::prelude::*;
use itertools::Itertools;
use log::debug;

use super::super::types::{Metadata, Timescale, Version};
use super::combinator_atoms::{digit, take_while};

pub(super) fn parse_date(words: &[&str]) -> Option<DateTime<Utc>> {
    // a date is typically composed of the 5 following words which can
    // occur in any order:
    // {Day, Month, Date(number in month), hh:mm:ss, year}.
    if words.len() != 5 {
        return None;
    }

    words.iter().permutations(words.len()).find_map(|permutation| {
        let full_date = permutation.iter().join(" ");
        NaiveDateTime::parse_from_str(&full_date, "%a %b %e %T %Y")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    })
}

pub(super) fn parse_version(words: &[&str]) -> Option<Version> {
    if words.is_empty() {
        return None;
    }
    Some(Version(words.join(" ")))
}

pub(super) fn parse_timescale(words: &[&str]) -> Option<(Option<u32>, Timescale)> {
    // we might see `1ps $end` or `1 ps $end`
    let (scalar, unit) = match words {
        [word] => {
            let res = take_while(word, digit);
            (res.matched, res.residual)
        }
        [scalar, unit] => (*scalar, *unit),
        _ => return None,
    };

    let scalar: u32 = scalar.parse().ok()?;
    let unit = Timescale::from_unit(unit)?;
    Some((Some(scalar), unit))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Date,
    Version,
    Timescale,
}

/// Gathers the bodies of `$date`, `$version` and `$timescale` while the
/// header is read line by line. A section may span several lines and is
/// closed by `$end`.
#[derive(Debug, Default)]
pub(super) struct MetadataCollector {
    open: Option<(Section, Vec<String>)>,
    metadata: Metadata,
}

impl MetadataCollector {
    pub(super) fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Starts a section for `keyword` if it is one we keep, feeding it the
    /// remainder of the line. Other keywords are ignored.
    pub(super) fn begin(&mut self, keyword: &str, rest: &str) {
        self.close();

        let section = match keyword {
            "$date" => Section::Date,
            "$version" => Section::Version,
            "$timescale" => Section::Timescale,
            _ => return,
        };
        self.open = Some((section, vec![]));
        self.feed(rest);
    }

    /// Adds the words of `text` to the open section, finishing it at `$end`.
    pub(super) fn feed(&mut self, text: &str) {
        for word in text.split_ascii_whitespace() {
            let Some((_, words)) = self.open.as_mut() else {
                return;
            };
            if word == "$end" {
                self.close();
            } else {
                words.push(word.to_string());
            }
        }
    }

    /// Finishes any open section with whatever words it has collected.
    pub(super) fn close(&mut self) {
        let Some((section, words)) = self.open.take() else {
            return;
        };
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        match section {
            Section::Date => match parse_date(&words) {
                Some(date) => self.metadata.date = Some(date),
                None => debug!("ignoring unparseable $date {words:?}"),
            },
            Section::Version => {
                if let Some(version) = parse_version(&words) {
                    self.metadata.version = Some(version);
                }
            }
            Section::Timescale => match parse_timescale(&words) {
                Some(timescale) => self.metadata.timescale = timescale,
                None => debug!("ignoring unparseable $timescale {words:?}"),
            },
        }
    }

    pub(super) fn finish(mut self) -> Metadata {
        self.close();
        self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_in_any_order() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 12, 9, 41, 7).unwrap();
        assert_eq!(
            parse_date(&["Mon", "Oct", "12", "09:41:07", "2026"]),
            Some(expected)
        );
        assert_eq!(
            parse_date(&["2026", "09:41:07", "Mon", "12", "Oct"]),
            Some(expected)
        );
        assert_eq!(parse_date(&["Mon", "Oct", "12", "2026"]), None);
        assert_eq!(parse_date(&["Tue", "Oct", "12", "09:41:07", "2026"]), None);
    }

    #[test]
    fn timescales() {
        assert_eq!(parse_timescale(&["1ps"]), Some((Some(1), Timescale::Ps)));
        assert_eq!(parse_timescale(&["10", "ns"]), Some((Some(10), Timescale::Ns)));
        assert_eq!(parse_timescale(&["10", "parsecs"]), None);
        assert_eq!(parse_timescale(&["ps"]), None);
        assert_eq!(parse_timescale(&[]), None);
    }

    #[test]
    fn single_line_sections() {
        let mut collector = MetadataCollector::default();
        collector.begin("$timescale", "1ps $end");
        assert!(!collector.is_open());
        collector.begin("$version", "Icarus Verilog $end");
        collector.begin("$scope", "module top $end");

        let metadata = collector.finish();
        assert_eq!(metadata.timescale, (Some(1), Timescale::Ps));
        assert_eq!(metadata.version, Some(Version("Icarus Verilog".to_string())));
        assert_eq!(metadata.date, None);
    }

    #[test]
    fn multi_line_sections() {
        let mut collector = MetadataCollector::default();
        collector.begin("$date", "");
        collector.feed("Mon Oct 12 09:41:07 2026");
        assert!(collector.is_open());
        collector.feed("$end");
        assert!(!collector.is_open());

        collector.begin("$timescale", "");
        collector.feed("100 us");
        // unterminated, closed by the next keyword
        collector.begin("$scope", "module top $end");

        let metadata = collector.finish();
        assert!(metadata.date.is_some());
        assert_eq!(metadata.timescale, (Some(100), Timescale::Us));
    }

    #[test]
    fn bad_sections_keep_defaults() {
        let mut collector = MetadataCollector::default();
        collector.begin("$date", "sometime last week $end");
        collector.begin("$timescale", "fast $end");
        assert_eq!(collector.finish(), Metadata::default());
    }
}
