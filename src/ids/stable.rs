/*
 * Responsibility
 * - Microsoft Graph stable (v1.0) の typed resource id
 * - ここに置くのは Template と field の対応のみ (parse などは ResourceId の default 実装)
 */
use std::fmt;

use crate::resourceids::{ParseResult, ResourceId, ResourceIdError, Segment, Template};

/// `/groups/{groupId}/calendarView/{eventId}/instances/{eventId1}/attachments/{attachmentId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupIdCalendarViewIdInstanceIdAttachmentId {
    pub group_id: String,
    pub event_id: String,
    pub event_id1: String,
    pub attachment_id: String,
}

impl GroupIdCalendarViewIdInstanceIdAttachmentId {
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

impl ResourceId for GroupIdCalendarViewIdInstanceIdAttachmentId {
    const TEMPLATE: &'static Template = &Template {
        name: "stable.groupIdCalendarViewIdInstanceIdAttachment",
        description: "Group Id Calendar View Id Instance Id Attachment",
        segments: &[
            Segment::literal("groups"),
            Segment::user("groupId", "Group"),
            Segment::literal("calendarView"),
            Segment::user("eventId", "Event"),
            Segment::literal("instances"),
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

impl fmt::Display for GroupIdCalendarViewIdInstanceIdAttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// `/users/{userId}/inferenceClassification/overrides/{inferenceClassificationOverrideId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdInferenceClassificationOverrideId {
    pub user_id: String,
    pub inference_classification_override_id: String,
}

impl UserIdInferenceClassificationOverrideId {
    pub fn new(
        user_id: impl Into<String>,
        inference_classification_override_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            inference_classification_override_id: inference_classification_override_id.into(),
        }
    }
}

impl ResourceId for UserIdInferenceClassificationOverrideId {
    const TEMPLATE: &'static Template = &Template {
        name: "stable.userIdInferenceClassificationOverride",
        description: "User Id Inference Classification Override",
        segments: &[
            Segment::literal("users"),
            Segment::user("userId", "User"),
            Segment::literal("inferenceClassification"),
            Segment::literal("overrides"),
            Segment::user(
                "inferenceClassificationOverrideId",
                "Inference Classification Override",
            ),
        ],
    };

    fn from_parse_result(mut input: ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            user_id: input.require(Self::TEMPLATE, "userId")?,
            inference_classification_override_id: input
                .require(Self::TEMPLATE, "inferenceClassificationOverrideId")?,
        })
    }

    fn segment_values(&self) -> Vec<&str> {
        vec![
            self.user_id.as_str(),
            self.inference_classification_override_id.as_str(),
        ]
    }
}

impl fmt::Display for UserIdInferenceClassificationOverrideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
