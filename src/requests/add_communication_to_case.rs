use crate::render::Summary;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for the `AddCommunicationToCase` operation.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddCommunicationToCaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,

    /// Body of the communication. The service accepts 1-8000 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_body: Option<String>,

    /// Email addresses copied on the communication, at most 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_email_addresses: Option<Vec<String>>,

    /// Id of a set of attachments previously registered with the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_set_id: Option<String>,
}

impl AddCommunicationToCaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_id(self, case_id: String) -> Self {
        Self {
            case_id: Some(case_id),
            ..self
        }
    }

    pub fn communication_body(self, communication_body: String) -> Self {
        Self {
            communication_body: Some(communication_body),
            ..self
        }
    }

    pub fn cc_email_addresses(self, cc_email_addresses: Vec<String>) -> Self {
        Self {
            cc_email_addresses: Some(cc_email_addresses),
            ..self
        }
    }

    pub fn attachment_set_id(self, attachment_set_id: String) -> Self {
        Self {
            attachment_set_id: Some(attachment_set_id),
            ..self
        }
    }

    /// Opt-in check of the documented body-length and CC-count constraints.
    pub fn validate(&self) -> Result<()> {
        if let Some(communication_body) = &self.communication_body {
            let length = communication_body.chars().count();

            if length == 0 || length > 8000 {
                tracing::warn!(
                    "AddCommunicationToCase CommunicationBody length {} is outside 1-8000",
                    length
                );

                return Err(Error::CommunicationBodyLength(length));
            }
        }

        if let Some(cc_email_addresses) = &self.cc_email_addresses {
            if cc_email_addresses.len() > 10 {
                tracing::warn!(
                    "AddCommunicationToCase lists {} CC addresses, the service accepts 10",
                    cc_email_addresses.len()
                );

                return Err(Error::TooManyCcEmailAddresses(cc_email_addresses.len()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for AddCommunicationToCaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = Summary::new()
            .field("CaseId", &self.case_id)
            .field("CommunicationBody", &self.communication_body)
            .field("CcEmailAddresses", &self.cc_email_addresses)
            .field("AttachmentSetId", &self.attachment_set_id)
            .finish();

        f.write_str(&summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_summary_keeps_declaration_order() {
        let request = AddCommunicationToCaseRequest::new()
            .attachment_set_id("set-1".to_string())
            .case_id("case-1".to_string());

        assert_eq!(
            request.to_string(),
            "{CaseId: case-1,AttachmentSetId: set-1}"
        );
    }

    #[test]
    fn test_serialized_body_omits_absent_fields() -> Result<()> {
        let request = AddCommunicationToCaseRequest::new()
            .case_id("case-1".to_string())
            .communication_body("Still broken after the last patch.".to_string());

        let body = serde_json::to_value(&request)?;

        assert_eq!(
            body,
            serde_json::json!({
                "CaseId": "case-1",
                "CommunicationBody": "Still broken after the last patch."
            })
        );

        Ok(())
    }

    #[test]
    fn test_validate_rejects_empty_and_oversized_bodies() {
        let empty = AddCommunicationToCaseRequest::new().communication_body(String::new());
        let oversized =
            AddCommunicationToCaseRequest::new().communication_body("x".repeat(8001));
        let fits = AddCommunicationToCaseRequest::new().communication_body("x".repeat(8000));

        assert!(empty.validate().is_err());
        assert!(oversized.validate().is_err());
        assert!(fits.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_more_than_ten_cc_addresses() {
        let addresses: Vec<String> = (0..11).map(|n| format!("cc{}@example.com", n)).collect();
        let request = AddCommunicationToCaseRequest::new().cc_email_addresses(addresses);

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_an_unpopulated_request() {
        assert!(AddCommunicationToCaseRequest::new().validate().is_ok());
    }
}
