/*
 * Responsibility
 * - Segment / Template の定義 (path template のデータ表現)
 * - Template からの ID 文字列の組み立て (emit は検証しない)
 * - Template は 'static な定数として各 typed ID が持つ
 */
use std::collections::HashMap;

use super::error::ResourceIdError;

/// One slash-delimited component of a resource id template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A literal which must appear verbatim at this position.
    Static {
        name: &'static str,
        value: &'static str,
    },
    /// A placeholder captured from the input under `name`.
    UserSpecified {
        name: &'static str,
        label: &'static str,
    },
}

impl Segment {
    /// A static segment whose name and literal are the same string, which is the
    /// case for every Graph path segment.
    pub const fn literal(value: &'static str) -> Self {
        Self::Static { name: value, value }
    }

    pub const fn user(name: &'static str, label: &'static str) -> Self {
        Self::UserSpecified { name, label }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Segment::Static { name, .. } | Segment::UserSpecified { name, .. } => name,
        }
    }

    pub fn is_user_specified(&self) -> bool {
        matches!(self, Segment::UserSpecified { .. })
    }
}

/// The fixed shape of one resource type's id.
#[derive(Debug, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub segments: &'static [Segment],
}

impl Template {
    /// Names of the user-specified segments, in template order.
    pub fn user_segments(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments
            .iter()
            .filter(|s| s.is_user_specified())
            .map(Segment::name)
    }

    /// Renders the template with `{name}` placeholders,
    /// e.g. `/users/{userId}/inferenceClassification/overrides/{inferenceClassificationOverrideId}`.
    pub fn placeholder(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push('/');
            match segment {
                Segment::Static { value, .. } => out.push_str(value),
                Segment::UserSpecified { name, .. } => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
        }
        out
    }

    /// Emits an id from user-specified values given in template order.
    ///
    /// Values are written as-is: nothing here checks that the output would parse
    /// again (a value containing `/` is emitted unchanged).
    pub fn emit<'a>(&self, mut values: impl Iterator<Item = &'a str>) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push('/');
            match segment {
                Segment::Static { value, .. } => out.push_str(value),
                Segment::UserSpecified { .. } => out.push_str(values.next().unwrap_or_default()),
            }
        }
        out
    }

    /// Emits an id from a name -> value map. Every user-specified segment must be
    /// present in `values`; extra entries are ignored.
    pub fn format(&self, values: &HashMap<String, String>) -> Result<String, ResourceIdError> {
        let mut ordered = Vec::new();
        for name in self.user_segments() {
            match values.get(name) {
                Some(v) => ordered.push(v.as_str()),
                None => {
                    let mut parsed_keys: Vec<String> = values.keys().cloned().collect();
                    parsed_keys.sort();
                    return Err(ResourceIdError::SegmentNotSpecified {
                        resource: self.description,
                        segment: name,
                        parsed_keys,
                    });
                }
            }
        }
        Ok(self.emit(ordered.into_iter()))
    }
}
