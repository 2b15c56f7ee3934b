// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use super::types::TakeResult;

pub(super) fn digit(chr: u8) -> bool {
    chr.is_ascii_digit()
}

pub(super) fn take_while(word: &str, cond: fn(u8) -> bool) -> TakeResult<'_> {
    let new_start = word.bytes().take_while(|chr| cond(*chr)).count();

    TakeResult {
        matched: &word[0..new_start],
        residual: &word[new_start..],
    }
}

/// Splits `word` after its first whitespace-separated token.
pub(super) fn first_token(word: &str) -> TakeResult<'_> {
    let end = word.find(char::is_whitespace).unwrap_or(word.len());

    TakeResult {
        matched: &word[0..end],
        residual: word[end..].trim_start(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_digits() {
        let res = take_while("10ps", digit);
        assert_eq!(res.matched, "10");
        assert_eq!(res.residual, "ps");

        let res = take_while("ps", digit);
        assert_eq!(res.matched, "");
        assert_eq!(res.residual, "ps");
    }

    #[test]
    fn split_first_token() {
        let res = first_token("$timescale   1 ps $end");
        assert_eq!(res.matched, "$timescale");
        assert_eq!(res.residual, "1 ps $end");

        let res = first_token("$end");
        assert_eq!(res.matched, "$end");
        assert_eq!(res.residual, "");
    }
}
