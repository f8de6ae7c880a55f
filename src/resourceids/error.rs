/**
 * Responsibility
 * - resource id の parse / projection / validate が上位に伝える意味の定義
 * - すべて呼び出し側で回復可能 (process を落とすものは無い)
 */
use thiserror::Error;

/// Why an input path did not fit a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} segments but the input only contained {actual}")]
    InsufficientSegments { expected: usize, actual: usize },

    #[error("expected {expected} segments but the input contained {actual} (unexpected trailing segments)")]
    UnexpectedTrailingSegments { expected: usize, actual: usize },

    #[error("segment {position}: expected the static segment {expected:?} but got {actual:?}")]
    SegmentMismatch {
        expected: &'static str,
        actual: String,
        position: usize,
    },

    #[error("segment {position}: the user-specified segment {segment:?} was empty")]
    EmptySegment {
        segment: &'static str,
        position: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceIdError {
    #[error("parsing {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseError,
    },

    /// A parse succeeded but the typed projection expected a segment the parse result
    /// does not hold. The template and the struct have drifted apart.
    #[error("the segment {segment:?} was not specified for {resource} (parsed segments: {parsed_keys:?})")]
    SegmentNotSpecified {
        resource: &'static str,
        segment: &'static str,
        parsed_keys: Vec<String>,
    },
}

impl ResourceIdError {
    pub fn parsing(input: &str, source: ParseError) -> Self {
        Self::Parse {
            input: input.to_string(),
            source,
        }
    }

    /// The underlying parse failure, if this error came from parsing.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            ResourceIdError::Parse { source, .. } => Some(source),
            ResourceIdError::SegmentNotSpecified { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("expected {key:?} to be a string")]
    NotAString { key: String },

    #[error(transparent)]
    Invalid(#[from] ResourceIdError),
}
