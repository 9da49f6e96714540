/// Matches a service name against a group pattern.
///
/// Only leading and trailing `*` are wildcards:
/// - `*` matches anything
/// - `*text*` matches names containing `text`
/// - `*text` matches names ending with `text`
/// - `text*` matches names starting with `text`
/// - anything else must be equal
///
/// Callers lower-case both sides first. A `*` in the middle of a pattern
/// (`ap*i`) is a literal character and only matches itself.
pub fn matches(candidate: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    if pattern.len() >= 2 && pattern.starts_with('*') && pattern.ends_with('*') {
        return candidate.contains(&pattern[1..pattern.len() - 1]);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        return candidate.ends_with(suffix);
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        return candidate.starts_with(prefix);
    }

    candidate == pattern
}

/// Case-insensitive variant used by the resolver.
pub fn matches_ignore_case(candidate: &str, pattern: &str) -> bool {
    matches(&candidate.to_lowercase(), &pattern.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_matches_everything() {
        for candidate in ["", "api", "bitcoind", "a*b"] {
            assert!(matches(candidate, "*"), "'*' should match {candidate:?}");
        }
    }

    #[test]
    fn trailing_star_is_prefix_match() {
        assert!(matches("api", "api*"));
        assert!(matches("api-worker", "api*"));
        assert!(!matches("my-api", "api*"));
    }

    #[test]
    fn leading_star_is_suffix_match() {
        assert!(matches("eth-relayer", "*relayer"));
        assert!(matches("relayer", "*relayer"));
        assert!(!matches("relayer-eth", "*relayer"));
    }

    #[test]
    fn surrounding_stars_are_substring_match() {
        assert!(matches("arbitrum-node", "*node*"));
        assert!(matches("node", "*node*"));
        assert!(!matches("nod", "*node*"));
    }

    #[test]
    fn double_star_matches_everything_via_empty_substring() {
        assert!(matches("anything", "**"));
        assert!(matches("", "**"));
    }

    #[test]
    fn plain_pattern_requires_equality() {
        assert!(matches("redis", "redis"));
        assert!(!matches("redis-cache", "redis"));
    }

    #[test]
    fn interior_star_is_literal() {
        assert!(!matches("api", "a*i"));
        assert!(!matches("ap-gateway-i", "ap*i"));
        assert!(matches("ap*i", "ap*i"));
    }

    #[test]
    fn star_touching_an_edge_still_anchors() {
        // Only the trailing star is a wildcard here, the middle one is literal.
        assert!(matches("a*bcd", "a*b*"));
        assert!(!matches("axbcd", "a*b*"));
    }

    #[test]
    fn ignore_case_lowercases_both_sides() {
        assert!(matches_ignore_case("API-Worker", "api*"));
        assert!(matches_ignore_case("api-worker", "*WORKER"));
        assert!(matches_ignore_case("Postgres", "POSTGRES"));
        assert!(!matches_ignore_case("Postgres", "mysql"));
    }
}
