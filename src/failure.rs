#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("MaxResults {0} is outside the accepted 10-100 range")]
    MaxResultsOutOfRange(i32),

    #[error("CommunicationBody must be 1-8000 characters, got {0}")]
    CommunicationBodyLength(usize),

    #[error("CcEmailAddresses accepts at most 10 entries, got {0}")]
    TooManyCcEmailAddresses(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_results_error_message() {
        let err = Error::MaxResultsOutOfRange(101);

        assert_eq!(
            err.to_string(),
            "MaxResults 101 is outside the accepted 10-100 range"
        )
    }

    #[test]
    fn test_communication_body_error_message() {
        let err = Error::CommunicationBodyLength(0);

        assert_eq!(
            err.to_string(),
            "CommunicationBody must be 1-8000 characters, got 0"
        )
    }

    #[test]
    fn test_cc_email_addresses_error_message() {
        let err = Error::TooManyCcEmailAddresses(12);

        assert_eq!(
            err.to_string(),
            "CcEmailAddresses accepts at most 10 entries, got 12"
        );
    }
}
