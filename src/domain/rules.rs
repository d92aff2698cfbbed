//! Classification of filter-list lines.
//!
//! Only two rule shapes yield a domain: adblock domain anchors (`||host^`)
//! and hosts-file entries (`0.0.0.0 host`). Everything else is dropped.

use once_cell::sync::Lazy;
use regex::Regex;

/// `||host^` at the start of the line; `host` may not contain `/`, `^` or `*`.
static ADBLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|\|([^/^*]+)\^").expect("ADBLOCK_PATTERN: hardcoded regex is invalid")
});

/// `0.0.0.0 host` anywhere in the line. The leading `.*` is greedy, so the
/// last qualifying occurrence wins.
static HOSTS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*0\.0\.0\.0\s+([a-zA-Z0-9.\-]+)")
        .expect("HOSTS_PATTERN: hardcoded regex is invalid")
});

/// What a single filter-list line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line, `!` comment or `[...]` section header.
    Skipped,
    Adblock(&'a str),
    Hosts(&'a str),
    Unrecognized,
}

pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('!') || line.starts_with('[') {
        return LineKind::Skipped;
    }

    if let Some(domain) = ADBLOCK_PATTERN.captures(line).and_then(|c| c.get(1)) {
        return LineKind::Adblock(domain.as_str());
    }

    if let Some(domain) = HOSTS_PATTERN.captures(line).and_then(|c| c.get(1)) {
        return LineKind::Hosts(domain.as_str());
    }

    LineKind::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_comments_headers_and_blanks() {
        assert_eq!(classify_line(""), LineKind::Skipped);
        assert_eq!(classify_line("   \t"), LineKind::Skipped);
        assert_eq!(classify_line("! Title: EasyPrivacy"), LineKind::Skipped);
        assert_eq!(classify_line("[Adblock Plus 2.0]"), LineKind::Skipped);
        assert_eq!(classify_line("  ! indented comment"), LineKind::Skipped);
    }

    #[test]
    fn test_comment_mentioning_hosts_entry_is_still_skipped() {
        assert_eq!(classify_line("! 0.0.0.0 example.com"), LineKind::Skipped);
    }

    #[test]
    fn test_adblock_rule() {
        assert_eq!(
            classify_line("||ads.example.com^"),
            LineKind::Adblock("ads.example.com")
        );
        assert_eq!(
            classify_line("  ||ads.example.com^  "),
            LineKind::Adblock("ads.example.com")
        );
    }

    #[test]
    fn test_adblock_rule_ignores_options_after_separator() {
        assert_eq!(
            classify_line("||metrics.example.net^$third-party"),
            LineKind::Adblock("metrics.example.net")
        );
    }

    #[test]
    fn test_adblock_rule_keeps_domain_verbatim() {
        assert_eq!(classify_line("||Ads.Example.COM^"), LineKind::Adblock("Ads.Example.COM"));
        assert_eq!(classify_line("||example.com.^"), LineKind::Adblock("example.com."));
    }

    #[test]
    fn test_adblock_rule_with_path_or_wildcard_is_rejected() {
        assert_eq!(classify_line("||cdn.example.com/script.js^"), LineKind::Unrecognized);
        assert_eq!(classify_line("||*.example.com^"), LineKind::Unrecognized);
        assert_eq!(classify_line("||example.com"), LineKind::Unrecognized);
    }

    #[test]
    fn test_hosts_rule() {
        assert_eq!(
            classify_line("0.0.0.0 tracker.example.org"),
            LineKind::Hosts("tracker.example.org")
        );
        assert_eq!(
            classify_line("0.0.0.0\t\tpixel-01.example.org # inline"),
            LineKind::Hosts("pixel-01.example.org")
        );
    }

    #[test]
    fn test_hosts_rule_matches_anywhere_in_line() {
        assert_eq!(classify_line("10.0.0.0 internal.example"), LineKind::Hosts("internal.example"));
        assert_eq!(
            classify_line("something 0.0.0.0 a.example 0.0.0.0 b.example"),
            LineKind::Hosts("b.example")
        );
    }

    #[test]
    fn test_hosts_token_stops_at_disallowed_character() {
        assert_eq!(classify_line("0.0.0.0 foo_bar.example"), LineKind::Hosts("foo"));
        assert_eq!(classify_line("0.0.0.0 "), LineKind::Unrecognized);
        assert_eq!(classify_line("0.0.0.0"), LineKind::Unrecognized);
    }

    #[test]
    fn test_adblock_takes_precedence_over_hosts() {
        assert_eq!(
            classify_line("||first.example^ 0.0.0.0 second.example"),
            LineKind::Adblock("first.example")
        );
    }

    #[test]
    fn test_other_rule_types_contribute_nothing() {
        assert_eq!(classify_line("@@||allowed.example.com^"), LineKind::Unrecognized);
        assert_eq!(classify_line("example.com##.ad-banner"), LineKind::Unrecognized);
        assert_eq!(classify_line("/banner\\d+/"), LineKind::Unrecognized);
    }
}
