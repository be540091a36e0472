use std::fmt;

/// Reasons a tag is left out of the version list.
/// These are never errors; they are only reported through debug logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRejection {
    /// Tag does not start with the configured prefix
    MissingPrefix { tag: String, prefix: String },
    /// Text after the prefix is not a `major.minor.patch[-pre][+build]` version
    Malformed { tag: String },
    /// Version has a pre-release component and pre-releases are not included
    PreReleaseExcluded { tag: String },
    /// Version has build metadata and build-metadata versions are not included
    BuildMetadataExcluded { tag: String },
}

impl TagRejection {
    /// The tag that was rejected.
    pub fn tag(&self) -> &str {
        match self {
            TagRejection::MissingPrefix { tag, .. }
            | TagRejection::Malformed { tag }
            | TagRejection::PreReleaseExcluded { tag }
            | TagRejection::BuildMetadataExcluded { tag } => tag,
        }
    }
}

impl fmt::Display for TagRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagRejection::MissingPrefix { tag, prefix } => {
                write!(f, "Tag '{}' does not start with prefix '{}'", tag, prefix)
            }
            TagRejection::Malformed { tag } => {
                write!(f, "Tag '{}' is not a semantic version", tag)
            }
            TagRejection::PreReleaseExcluded { tag } => {
                write!(f, "Tag '{}' is a pre-release", tag)
            }
            TagRejection::BuildMetadataExcluded { tag } => {
                write!(f, "Tag '{}' carries build metadata", tag)
            }
        }
    }
}
