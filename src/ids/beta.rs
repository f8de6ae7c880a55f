/*
 * Responsibility
 * - Microsoft Graph beta の typed resource id
 */
use std::fmt;

use crate::resourceids::{ParseResult, ResourceId, ResourceIdError, Segment, Template};

/// `/groups/{groupId}/calendar/calendarView/{eventId}/exceptionOccurrences/{eventId1}/attachments/{attachmentId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId {
    pub group_id: String,
    pub event_id: String,
    pub event_id1: String,
    pub attachment_id: String,
}

impl GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId {
    pub fn new(
        group_id: impl Into<String>,
        event_id: impl Into<String>,
        event_id1: impl Into<String>,
        attachment_id: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            event_id: event_id.into(),
            event_id1: event_id1.into(),
            attachment_id: attachment_id.into(),
        }
    }
}

impl ResourceId for GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId {
    const TEMPLATE: &'static Template = &Template {
        name: "beta.groupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachment",
        description: "Group Id Calendar Calendar View Id Exception Occurrence Id Attachment",
        segments: &[
            Segment::literal("groups"),
            Segment::user("groupId", "Group"),
            Segment::literal("calendar"),
            Segment::literal("calendarView"),
            Segment::user("eventId", "Event"),
            Segment::literal("exceptionOccurrences"),
            Segment::user("eventId1", "Event Id 1"),
            Segment::literal("attachments"),
            Segment::user("attachmentId", "Attachment"),
        ],
    };

    fn from_parse_result(mut input: ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            group_id: input.require(Self::TEMPLATE, "groupId")?,
            event_id: input.require(Self::TEMPLATE, "eventId")?,
            event_id1: input.require(Self::TEMPLATE, "eventId1")?,
            attachment_id: input.require(Self::TEMPLATE, "attachmentId")?,
        })
    }

    fn segment_values(&self) -> Vec<&str> {
        vec![
            self.group_id.as_str(),
            self.event_id.as_str(),
            self.event_id1.as_str(),
            self.attachment_id.as_str(),
        ]
    }
}

impl fmt::Display for GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::ParseError;

    type AttachmentId = GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId;

    #[test]
    fn formats_and_parses_back() {
        let id = AttachmentId::new("g1", "e1", "e2", "a1");
        let formatted = id.id();
        assert_eq!(
            formatted,
            "/groups/g1/calendar/calendarView/e1/exceptionOccurrences/e2/attachments/a1"
        );

        let parsed = AttachmentId::parse(&formatted).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn strict_parse_rejects_capitalised_literal() {
        let input = "/Groups/g1/calendar/calendarView/e1/exceptionOccurrences/e2/attachments/a1";

        let err = AttachmentId::parse(input).unwrap_err();
        assert_eq!(
            err.parse_error(),
            Some(&ParseError::SegmentMismatch {
                expected: "groups",
                actual: "Groups".to_string(),
                position: 0,
            })
        );

        let id = AttachmentId::parse_insensitively(input).unwrap();
        assert_eq!(id, AttachmentId::new("g1", "e1", "e2", "a1"));
    }

    #[test]
    fn short_input_is_insufficient() {
        let err = AttachmentId::parse("/groups/g1").unwrap_err();
        assert!(matches!(
            err.parse_error(),
            Some(ParseError::InsufficientSegments {
                expected: 9,
                actual: 2
            })
        ));
    }

    #[test]
    fn formatting_a_parsed_id_canonicalises_slashes() {
        let input = "groups/g1/calendar/calendarView/e1/exceptionOccurrences/e2/attachments/a1///";
        let id = AttachmentId::parse(input).unwrap();
        assert_eq!(
            id.id(),
            "/groups/g1/calendar/calendarView/e1/exceptionOccurrences/e2/attachments/a1"
        );
    }

    #[test]
    fn emission_is_permissive() {
        let id = AttachmentId::new("g/1", "e1", "e2", "a1");
        let formatted = id.id();
        assert_eq!(
            formatted,
            "/groups/g/1/calendar/calendarView/e1/exceptionOccurrences/e2/attachments/a1"
        );
        assert!(AttachmentId::parse(&formatted).is_err());
    }

    #[test]
    fn display_uses_labels() {
        let id = AttachmentId::new("g1", "e1", "e2", "a1");
        assert_eq!(
            id.to_string(),
            "Group Id Calendar Calendar View Id Exception Occurrence Id Attachment (Group: \"g1\"\nEvent: \"e1\"\nEvent Id 1: \"e2\"\nAttachment: \"a1\")"
        );
    }
}
