use crate::render::Summary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for the `ResolveCase` operation. An absent `CaseId` resolves
/// nothing; the service reports which case, if any, changed state.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolveCaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}

impl ResolveCaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_id(self, case_id: String) -> Self {
        Self {
            case_id: Some(case_id),
        }
    }
}

impl fmt::Display for ResolveCaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = Summary::new().field("CaseId", &self.case_id).finish();

        f.write_str(&summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_summary_with_and_without_case_id() {
        let empty = ResolveCaseRequest::new();
        let populated = ResolveCaseRequest::new().case_id("case-1".to_string());

        assert_eq!(empty.to_string(), "{}");
        assert_eq!(populated.to_string(), "{CaseId: case-1}");
    }

    #[test]
    fn test_requests_compare_by_value() {
        let left = ResolveCaseRequest::new().case_id("case-1".to_string());
        let right = ResolveCaseRequest::new().case_id("case-1".to_string());

        assert_eq!(left, right);
        assert_ne!(left, ResolveCaseRequest::new());
    }

    #[test]
    fn test_serialized_empty_request_is_an_empty_object() -> Result<()> {
        let body = serde_json::to_value(ResolveCaseRequest::new())?;

        assert_eq!(body, serde_json::json!({}));

        Ok(())
    }
}
