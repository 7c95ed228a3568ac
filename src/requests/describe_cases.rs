use crate::render::Summary;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for the `DescribeCases` operation: a filtered list of support
/// cases, paginated the same way as `DescribeCommunications`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCasesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id_list: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_resolved_cases: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Number of results per page. The service accepts 10-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_communications: Option<bool>,
}

impl DescribeCasesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_id_list(self, case_id_list: Vec<String>) -> Self {
        Self {
            case_id_list: Some(case_id_list),
            ..self
        }
    }

    pub fn display_id(self, display_id: String) -> Self {
        Self {
            display_id: Some(display_id),
            ..self
        }
    }

    pub fn after_time(self, after_time: String) -> Self {
        Self {
            after_time: Some(after_time),
            ..self
        }
    }

    pub fn before_time(self, before_time: String) -> Self {
        Self {
            before_time: Some(before_time),
            ..self
        }
    }

    pub fn include_resolved_cases(self, include_resolved_cases: bool) -> Self {
        Self {
            include_resolved_cases: Some(include_resolved_cases),
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

    pub fn language(self, language: String) -> Self {
        Self {
            language: Some(language),
            ..self
        }
    }

    pub fn include_communications(self, include_communications: bool) -> Self {
        Self {
            include_communications: Some(include_communications),
            ..self
        }
    }

    /// Opt-in check of the documented `MaxResults` range.
    pub fn validate(&self) -> Result<()> {
        if let Some(max_results) = self.max_results {
            if !(10..=100).contains(&max_results) {
                tracing::warn!(
                    "DescribeCases MaxResults {} is outside 10-100",
                    max_results
                );

                return Err(Error::MaxResultsOutOfRange(max_results));
            }
        }

        Ok(())
    }
}

impl fmt::Display for DescribeCasesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = Summary::new()
            .field("CaseIdList", &self.case_id_list)
            .field("DisplayId", &self.display_id)
            .field("AfterTime", &self.after_time)
            .field("BeforeTime", &self.before_time)
            .field("IncludeResolvedCases", &self.include_resolved_cases)
            .field("NextToken", &self.next_token)
            .field("MaxResults", &self.max_results)
            .field("Language", &self.language)
            .field("IncludeCommunications", &self.include_communications)
            .finish();

        f.write_str(&summary)
    }
}
