use serde::{Deserialize, Serialize};

/// Course object as Canvas returns it. Restricted-access courses can come
/// back without a name; every field the gateway reads is optional here and
/// checked when the record is built.
#[derive(Debug, Deserialize)]
pub struct CourseObject {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DiscussionTopicObject {
    pub id: Option<i64>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssignmentObject {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Form body of the submission call.
#[derive(Debug, Serialize)]
pub struct SubmissionRequest<'a> {
    pub submission_data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionOutcome {
    #[serde(default)]
    pub status: Option<String>,
}
