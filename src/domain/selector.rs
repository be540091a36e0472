use crate::config::Config;
use crate::domain::ParsedVersion;

/// Select the release versions among `tags`.
///
/// Tags that lack the prefix, do not parse, or carry a component the
/// configuration does not allow are dropped. The rest come back verbatim,
/// newest `major.minor.patch` first. Within one triplet, versions without a
/// pre-release come before those with one; anything still equal keeps its
/// input order. Pre-release identifiers are never compared.
pub fn select_versions<I, S>(tags: I, config: &Config) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = 0usize;
    let mut versions: Vec<ParsedVersion> = tags
        .into_iter()
        .filter_map(|tag| {
            seen += 1;
            match ParsedVersion::classify(tag.as_ref(), config) {
                Ok(version) => Some(version),
                Err(rejection) => {
                    tracing::debug!(tag = rejection.tag(), "skipping tag: {}", rejection);
                    None
                }
            }
        })
        .collect();

    // sort_by is stable, so ties stay in input order
    versions.sort_by(|a, b| b.precedence().cmp(&a.precedence()));

    tracing::debug!(
        total = seen,
        selected = versions.len(),
        prefix = %config.prefix,
        "selected version tags"
    );

    versions.into_iter().map(|v| v.original).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[&str] = &[
        "dummy",
        "foo-0.10.1",
        "foo-0.9.0",
        "foo-0.9.3",
        "foo-0.8.4-pre",
        "foo-0.8.4",
        "foo-0.8.3+win",
        "foo-0.8.2-pre.pre+win.win",
        "foo-0.7.0-pre+win+invalid",
        "v0.10.1",
        "v0.9.0",
        "v0.9.3",
        "v0.8.4-pre",
        "v0.8.4",
        "v0.8.3+win",
        "v0.8.2-pre.pre+win.win",
        "v0.7.0-pre+win+invalid",
    ];

    fn config(prefix: &str, pre: bool, build: bool) -> Config {
        Config {
            prefix: prefix.to_string(),
            include_pre_release: pre,
            include_build_metadata: build,
        }
    }

    #[test]
    fn test_default_prefix() {
        let result = select_versions(INPUT, &Config::default());
        assert_eq!(result, vec!["v0.10.1", "v0.9.3", "v0.9.0", "v0.8.4"]);
    }

    #[test]
    fn test_custom_prefix() {
        let result = select_versions(INPUT, &config("foo-", false, false));
        assert_eq!(
            result,
            vec!["foo-0.10.1", "foo-0.9.3", "foo-0.9.0", "foo-0.8.4"]
        );
    }

    #[test]
    fn test_with_pre_release() {
        let result = select_versions(INPUT, &config("v", true, false));
        assert_eq!(
            result,
            vec!["v0.10.1", "v0.9.3", "v0.9.0", "v0.8.4", "v0.8.4-pre"]
        );

        let result = select_versions(INPUT, &config("foo-", true, false));
        assert_eq!(
            result,
            vec!["foo-0.10.1", "foo-0.9.3", "foo-0.9.0", "foo-0.8.4", "foo-0.8.4-pre"]
        );
    }

    #[test]
    fn test_with_build_metadata() {
        let result = select_versions(INPUT, &config("v", false, true));
        assert_eq!(
            result,
            vec!["v0.10.1", "v0.9.3", "v0.9.0", "v0.8.4", "v0.8.3+win"]
        );

        let result = select_versions(INPUT, &config("foo-", false, true));
        assert_eq!(
            result,
            vec!["foo-0.10.1", "foo-0.9.3", "foo-0.9.0", "foo-0.8.4", "foo-0.8.3+win"]
        );
    }

    #[test]
    fn test_with_all_extensions() {
        let result = select_versions(INPUT, &config("foo-", true, true));
        assert_eq!(
            result,
            vec![
                "foo-0.10.1",
                "foo-0.9.3",
                "foo-0.9.0",
                "foo-0.8.4",
                "foo-0.8.4-pre",
                "foo-0.8.3+win",
                "foo-0.8.2-pre.pre+win.win",
            ]
        );
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        let result = select_versions(["v0.9.9", "v0.10.0", "v0.2.0", "v10.0.0", "v9.0.0"], &Config::default());
        assert_eq!(result, vec!["v10.0.0", "v9.0.0", "v0.10.0", "v0.9.9", "v0.2.0"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let tags = ["v1.0.0+b", "v1.0.0-rc", "v1.0.0", "v1.0.0-alpha", "v01.0.0"];
        let result = select_versions(tags, &config("v", true, true));
        assert_eq!(
            result,
            vec!["v1.0.0+b", "v1.0.0", "v01.0.0", "v1.0.0-rc", "v1.0.0-alpha"]
        );

        let reversed: Vec<&str> = tags.iter().rev().copied().collect();
        let result = select_versions(&reversed, &config("v", true, true));
        assert_eq!(
            result,
            vec!["v01.0.0", "v1.0.0", "v1.0.0+b", "v1.0.0-alpha", "v1.0.0-rc"]
        );
    }

    #[test]
    fn test_pre_release_identifiers_not_compared() {
        let result = select_versions(["v2.0.0-beta", "v2.0.0-alpha", "v2.0.0-rc"], &config("v", true, false));
        assert_eq!(result, vec!["v2.0.0-beta", "v2.0.0-alpha", "v2.0.0-rc"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let result = select_versions(["v1.0.0", "v2.0.0", "v1.0.0"], &Config::default());
        assert_eq!(result, vec!["v2.0.0", "v1.0.0", "v1.0.0"]);
    }

    #[test]
    fn test_output_is_subset_of_input() {
        for cfg in [
            config("v", false, false),
            config("v", true, true),
            config("foo-", true, false),
            config("", true, true),
        ] {
            for tag in select_versions(INPUT, &cfg) {
                assert!(INPUT.contains(&tag.as_str()), "{tag} not in input");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for cfg in [config("v", true, true), config("foo-", false, true)] {
            let once = select_versions(INPUT, &cfg);
            let twice = select_versions(&once, &cfg);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_prefix_only_bare_versions() {
        let result = select_versions(["1.0.0", "v2.0.0", "0.3.0"], &config("", false, false));
        assert_eq!(result, vec!["1.0.0", "0.3.0"]);
    }

    #[test]
    fn test_empty_input() {
        let result = select_versions(Vec::<String>::new(), &Config::default());
        assert!(result.is_empty());
    }
}
