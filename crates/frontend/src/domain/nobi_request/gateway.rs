//! Submission gateway
//!
//! `begin_submit` claims the in-flight flag and builds the payload, `send`
//! posts it and classifies the result, `finish_submit` applies the outcome
//! and releases the flag. Nothing in here returns an error: every failure
//! ends up as a message on the form.

use chrono::NaiveDate;
use contracts::domain::nobi_request::{FormRecord, SubmissionPayload};
use contracts::shared::liferay::ErrorResponse;

use super::api::{HostApi, HostResponse};
use super::state::{FormMessage, NobiFormState};

pub const SUCCESS_MESSAGE: &str = "NOBI request submitted successfully!";
pub const RETRY_MESSAGE: &str = "Error submitting request. Please try again.";
const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx from the host
    Succeeded,
    /// Host answered with a non-2xx status; carries the message to show
    Rejected(String),
    /// The request did not complete
    Failed,
}

impl SubmitOutcome {
    pub fn from_response(response: Result<HostResponse, String>) -> Self {
        match response {
            Ok(r) if r.is_success() => SubmitOutcome::Succeeded,
            Ok(r) => {
                let message = ErrorResponse::message_from_body(&r.body)
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                log::warn!("Submission rejected with status {}: {}", r.status, message);
                SubmitOutcome::Rejected(message)
            }
            Err(e) => {
                log::error!("Submission error: {}", e);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn message(&self) -> FormMessage {
        match self {
            SubmitOutcome::Succeeded => FormMessage::success(SUCCESS_MESSAGE),
            SubmitOutcome::Rejected(msg) => {
                FormMessage::error(format!("Error submitting request: {}", msg))
            }
            SubmitOutcome::Failed => FormMessage::error(RETRY_MESSAGE),
        }
    }
}

/// Post the payload and classify the result
pub async fn send<A: HostApi>(api: &A, payload: &SubmissionPayload) -> SubmitOutcome {
    SubmitOutcome::from_response(api.create_request(payload).await)
}

impl NobiFormState {
    /// Claim the in-flight flag and build the payload
    ///
    /// Returns `None` while another submission is outstanding.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.message = None;
        Some(SubmissionPayload::from(&self.record))
    }

    /// Apply a submission outcome and release the in-flight flag
    ///
    /// On success the record is replaced by a blank one dated `today`; on
    /// failure it is left as is for correction.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome, today: NaiveDate) {
        if outcome == SubmitOutcome::Succeeded {
            log::info!("NOBI request submitted");
            self.record = FormRecord::blank(today);
            if self.settings.reset_page_on_success {
                self.wizard.reset();
            }
        }
        self.message = Some(outcome.message());
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nobi_request::api::fake::FakeApi;
    use crate::domain::nobi_request::state::tests::{state, state_with, today};
    use crate::shared::config::FormSettings;
    use contracts::domain::nobi_request::{AmountField, TextField};
    use futures::executor::block_on;

    /// Full submit cycle, as the view model runs it
    async fn submit(api: &FakeApi, state: &mut NobiFormState, today: NaiveDate) {
        let Some(payload) = state.begin_submit() else {
            return;
        };
        let outcome = send(api, &payload).await;
        state.finish_submit(outcome, today);
    }

    fn filled_state() -> NobiFormState {
        let mut s = state();
        s.set_field(TextField::VendorName, "Initech");
        s.set_field(TextField::Currency, "GBP");
        s.set_amount(AmountField::TotalPrice, "120.00");
        s.select_company("acme", || 0.0);
        s
    }

    fn rejected(status: u16, body: &str) -> FakeApi {
        FakeApi {
            submit_response: Ok(HostResponse {
                status,
                body: body.to_string(),
            }),
            ..FakeApi::default()
        }
    }

    #[test]
    fn test_success_resets_record() {
        let api = FakeApi::default();
        let mut s = filled_state();
        let step = s.go_next().unwrap();
        assert!(s.finish_transition(step.ticket));
        let next_day = today().succ_opt().unwrap();

        block_on(submit(&api, &mut s, next_day));

        assert_eq!(api.posts.get(), 1);
        assert_eq!(s.record(), &FormRecord::blank(next_day));
        assert_eq!(s.message(), Some(&FormMessage::success(SUCCESS_MESSAGE)));
        assert!(!s.is_submitting());
        assert_eq!(s.wizard().page(), 2);
    }

    #[test]
    fn test_success_can_reset_page() {
        let api = FakeApi::default();
        let mut s = state_with(FormSettings {
            reset_page_on_success: true,
            ..FormSettings::default()
        });
        s.go_next();
        block_on(submit(&api, &mut s, today()));
        assert_eq!(s.wizard().page(), 1);
        assert!(!s.wizard().is_transitioning());
    }

    #[test]
    fn test_page_reset_ignores_earlier_unlock() {
        let api = FakeApi::default();
        let mut s = state_with(FormSettings {
            reset_page_on_success: true,
            ..FormSettings::default()
        });
        let before_submit = s.go_next().unwrap();
        block_on(submit(&api, &mut s, today()));

        let after_submit = s.go_next().unwrap();
        assert!(!s.finish_transition(before_submit.ticket));
        assert!(s.wizard().is_transitioning());
        assert_eq!(s.go_prev(), None);
        assert_eq!(s.wizard().page(), 2);

        assert!(s.finish_transition(after_submit.ticket));
        assert_eq!(s.go_prev().map(|m| m.page), Some(1));
    }

    #[test]
    fn test_payload_translates_currency() {
        let api = FakeApi::default();
        let mut s = filled_state();
        block_on(submit(&api, &mut s, today()));

        let payload = api.last_payload.borrow().clone().unwrap();
        assert_eq!(payload.currency, "£");
        assert_eq!(payload.total_price, 120.0);
        assert_eq!(payload.company.name, "Acme Ltd");
        assert_eq!(payload.vendor_name, "Initech");
    }

    #[test]
    fn test_double_submit_posts_once() {
        let api = FakeApi::default();
        let mut s = filled_state();

        let first = s.begin_submit();
        let second = s.begin_submit();
        assert!(first.is_some());
        assert!(second.is_none());
        assert!(s.is_submitting());

        for payload in [first, second].into_iter().flatten() {
            let outcome = block_on(send(&api, &payload));
            s.finish_submit(outcome, today());
        }
        assert_eq!(api.posts.get(), 1);
        assert!(!s.is_submitting());

        // released after completion
        assert!(s.begin_submit().is_some());
    }

    #[test]
    fn test_rejection_keeps_record_and_shows_message() {
        let api = rejected(400, r#"{"message":"Vendor number is invalid"}"#);
        let mut s = filled_state();
        let before = s.record().clone();

        block_on(submit(&api, &mut s, today()));

        assert_eq!(s.record(), &before);
        assert_eq!(
            s.message(),
            Some(&FormMessage::error(
                "Error submitting request: Vendor number is invalid"
            ))
        );
        assert!(!s.is_submitting());
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let api = rejected(500, "<html>Internal Server Error</html>");
        let mut s = filled_state();
        block_on(submit(&api, &mut s, today()));
        assert_eq!(
            s.message().map(|m| m.text.as_str()),
            Some("Error submitting request: Unknown error")
        );
    }

    #[test]
    fn test_network_failure_shows_retry_message() {
        let api = FakeApi {
            submit_response: Err("Failed to send request: TypeError".to_string()),
            ..FakeApi::default()
        };
        let mut s = filled_state();
        let before = s.record().clone();

        block_on(submit(&api, &mut s, today()));

        assert_eq!(s.record(), &before);
        assert_eq!(s.message(), Some(&FormMessage::error(RETRY_MESSAGE)));
        assert!(s.message().unwrap().is_error());
        assert!(!s.is_submitting());
    }

    #[test]
    fn test_begin_submit_clears_previous_message() {
        let api = rejected(400, "{}");
        let mut s = filled_state();
        block_on(submit(&api, &mut s, today()));
        assert!(s.message().is_some());
        s.begin_submit();
        assert_eq!(s.message(), None);
    }
}
