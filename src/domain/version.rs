use regex::Regex;
use std::sync::OnceLock;

use crate::boundary::TagRejection;
use crate::config::Config;

/// `major.minor.patch`, then optional `-pre.release` and `+build.metadata`.
const VERSION_PATTERN: &str = r"^(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// A tag that matched the version grammar under a prefix.
///
/// Keeps the tag text verbatim in `original` so output never re-renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Vec<String>,
    pub build_metadata: Vec<String>,
    pub original: String,
}

impl ParsedVersion {
    /// Parse `tag` after stripping `prefix` from its start.
    ///
    /// Returns `None` if the prefix is absent or the remainder is not a full
    /// match of the grammar. Numeric parts may carry leading zeros; a part too
    /// large for `u64` makes the whole tag unparsable.
    pub fn parse(tag: &str, prefix: &str) -> Option<Self> {
        let rest = tag.strip_prefix(prefix)?;
        Self::parse_unprefixed(tag, rest)
    }

    fn parse_unprefixed(tag: &str, rest: &str) -> Option<Self> {
        let caps = version_regex().captures(rest)?;

        let major = caps[1].parse::<u64>().ok()?;
        let minor = caps[2].parse::<u64>().ok()?;
        let patch = caps[3].parse::<u64>().ok()?;

        let identifiers = |idx: usize| -> Vec<String> {
            caps.get(idx)
                .map(|m| m.as_str().split('.').map(str::to_string).collect())
                .unwrap_or_default()
        };

        Some(ParsedVersion {
            major,
            minor,
            patch,
            pre_release: identifiers(4),
            build_metadata: identifiers(5),
            original: tag.to_string(),
        })
    }

    /// Parse `tag` and apply the inclusion policy of `config`.
    pub fn classify(tag: &str, config: &Config) -> Result<Self, TagRejection> {
        let rest = tag
            .strip_prefix(config.prefix.as_str())
            .ok_or_else(|| TagRejection::MissingPrefix {
                tag: tag.to_string(),
                prefix: config.prefix.clone(),
            })?;

        let version = Self::parse_unprefixed(tag, rest).ok_or_else(|| TagRejection::Malformed {
            tag: tag.to_string(),
        })?;

        if version.is_pre_release() && !config.include_pre_release {
            return Err(TagRejection::PreReleaseExcluded {
                tag: tag.to_string(),
            });
        }
        if version.has_build_metadata() && !config.include_build_metadata {
            return Err(TagRejection::BuildMetadataExcluded {
                tag: tag.to_string(),
            });
        }

        Ok(version)
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }

    /// Ordering key: `major.minor.patch`, then a release above its pre-releases.
    /// Pre-release identifiers themselves are not compared.
    pub fn precedence(&self) -> (u64, u64, u64, bool) {
        (self.major, self.minor, self.patch, !self.is_pre_release())
    }
}
