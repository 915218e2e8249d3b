use std::collections::BTreeMap;

use error_stack::Report;
use paytpv_env::logger;

use crate::{core::errors::BankstoreError, types::GatewayResult};

/// Collapse an operation outcome into the uniform `OK`/`KO` result.
pub fn normalize(
    operation: &str,
    outcome: Result<BTreeMap<String, String>, Report<BankstoreError>>,
) -> GatewayResult {
    match outcome {
        Ok(data) => GatewayResult::Ok { data },
        Err(report) => {
            let error_code = report.current_context().error_code();
            match report.current_context() {
                BankstoreError::GatewayError { .. } => {
                    logger::info!(operation, %error_code, "gateway declined the operation");
                }
                BankstoreError::MissingRequiredField { .. }
                | BankstoreError::InvalidValue { .. } => {
                    logger::warn!(
                        operation,
                        %error_code,
                        error = ?report,
                        "operation input failed validation"
                    );
                }
                _ => {
                    logger::error!(operation, %error_code, error = ?report, "operation failed");
                }
            }
            GatewayResult::ko(error_code)
        }
    }
}

#[cfg(test)]
mod tests {
    use error_stack::report;

    use super::*;

    #[test]
    fn test_success_passes_data_through() {
        let data = BTreeMap::from([("DS_RESPONSE".to_owned(), "1".to_owned())]);
        assert_eq!(
            normalize("remove_user", Ok(data.clone())),
            GatewayResult::Ok { data }
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            normalize("add_user", Err(report!(BankstoreError::TransportFailure))),
            GatewayResult::ko("1011")
        );
        assert_eq!(
            normalize(
                "add_user",
                Err(report!(BankstoreError::GatewayError {
                    code: "1021".to_owned()
                }))
            ),
            GatewayResult::ko("1021")
        );
        assert_eq!(
            normalize(
                "add_user",
                Err(report!(BankstoreError::MissingRequiredField {
                    field_name: "amount"
                }))
            ),
            GatewayResult::ko("1002")
        );
        assert_eq!(
            normalize("add_user", Err(report!(BankstoreError::UnexpectedResponse))),
            GatewayResult::ko("1002")
        );
    }
}
