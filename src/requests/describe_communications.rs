use crate::render::Summary;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for the `DescribeCommunications` operation: communications
/// and attachments for one or more support cases, optionally filtered by
/// case id and date range.
///
/// Every field is optional. An absent field is `None` and stays out of the
/// serialized request entirely; case data is kept by the service for 12
/// months after case creation.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCommunicationsRequest {
    /// Support case id, an alphanumeric string formatted like
    /// `case-12345678910-2013-c4c1d2bf33c5cf47`. Not validated client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,

    /// End of the date filter range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_time: Option<String>,

    /// Start of the date filter range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_time: Option<String>,

    /// Resumption point returned by a previous page. Opaque: echo it back
    /// unmodified, never construct one locally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Number of results per page. The service accepts 10-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeCommunicationsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_id(self, case_id: String) -> Self {
        Self {
            case_id: Some(case_id),
            ..self
        }
    }

    pub fn before_time(self, before_time: String) -> Self {
        Self {
            before_time: Some(before_time),
            ..self
        }
    }

    pub fn after_time(self, after_time: String) -> Self {
        Self {
            after_time: Some(after_time),
            ..self
        }
    }

    pub fn next_token(self, next_token: String) -> Self {
        Self {
            next_token: Some(next_token),
            ..self
        }
    }

    pub fn max_results(self, max_results: i32) -> Self {
        Self {
            max_results: Some(max_results),
            ..self
        }
    }

    /// Opt-in check of the documented `MaxResults` range. Assignment and
    /// chaining never call this; the service stays the authority on every
    /// other constraint, including `AfterTime`/`BeforeTime` consistency.
    pub fn validate(&self) -> Result<()> {
        if let Some(max_results) = self.max_results {
            if !(10..=100).contains(&max_results) {
                tracing::warn!(
                    "DescribeCommunications MaxResults {} is outside 10-100",
                    max_results
                );

                return Err(Error::MaxResultsOutOfRange(max_results));
            }
        }

        Ok(())
    }
}

impl fmt::Display for DescribeCommunicationsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = Summary::new()
            .field("CaseId", &self.case_id)
            .field("BeforeTime", &self.before_time)
            .field("AfterTime", &self.after_time)
            .field("NextToken", &self.next_token)
            .field("MaxResults", &self.max_results)
            .finish();

        f.write_str(&summary)
    }
}
