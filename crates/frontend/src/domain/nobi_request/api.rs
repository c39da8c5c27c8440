//! Host platform API used by the loader and the gateway
//!
//! `HostApi` is the seam: `LiferayApi` talks to the real endpoints through
//! `gloo-net`, tests substitute an in-memory fake.

use contracts::domain::common::ReferenceOption;
use contracts::domain::nobi_request::SubmissionPayload;
use contracts::shared::liferay::{ListTypeDefinition, UserAccount};
use gloo_net::http::Request;
use std::future::Future;

use crate::shared::api_utils::api_url;
use crate::shared::config::HostSettings;

const LIST_TYPE_DEFINITIONS_PATH: &str = "/o/headless-admin-list-type/v1.0/list-type-definitions";
const MY_USER_ACCOUNT_PATH: &str = "/o/headless-admin-user/v1.0/my-user-account";
const NOBI_REQUESTS_PATH: &str = "/o/c/nobprequests/";

/// Raw result of a request that reached the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResponse {
    pub status: u16,
    pub body: String,
}

impl HostResponse {
    pub fn is_success(&self) -> bool {
        is_success_status(self.status)
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build the submission response from an already-received status
///
/// The body is only read for non-2xx answers; an unreadable error body is
/// kept empty so the caller falls back to its generic message.
async fn submission_response<F, Fut>(status: u16, read_body: F) -> HostResponse
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    if is_success_status(status) {
        return HostResponse {
            status,
            body: String::new(),
        };
    }

    let body = match read_body().await {
        Ok(body) => body,
        Err(e) => {
            log::error!("Failed to read error response ({}): {}", status, e);
            String::new()
        }
    };
    HostResponse { status, body }
}

/// Operations the form needs from the host platform
///
/// `Err` means the request never produced a usable response (network,
/// serialization or parse failure).
#[allow(async_fn_in_trait)]
pub trait HostApi {
    async fn fetch_reference_list(&self, list_type_id: u64) -> Result<Vec<ReferenceOption>, String>;

    async fn fetch_current_user(&self) -> Result<UserAccount, String>;

    async fn create_request(&self, payload: &SubmissionPayload) -> Result<HostResponse, String>;
}

#[derive(Debug, Clone)]
pub struct LiferayApi {
    api_base: String,
    auth_token: String,
}

impl LiferayApi {
    pub fn new(host: &HostSettings) -> Self {
        Self {
            api_base: host.api_base.clone(),
            auth_token: host.auth_token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.api_base, path, &self.auth_token)
    }
}

impl HostApi for LiferayApi {
    async fn fetch_reference_list(&self, list_type_id: u64) -> Result<Vec<ReferenceOption>, String> {
        let url = self.url(&format!("{}/{}", LIST_TYPE_DEFINITIONS_PATH, list_type_id));

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "Failed to fetch list type {}: {}",
                list_type_id,
                response.status()
            ));
        }

        let definition: ListTypeDefinition = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(definition.into_options())
    }

    async fn fetch_current_user(&self) -> Result<UserAccount, String> {
        let response = Request::get(&self.url(MY_USER_ACCOUNT_PATH))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to fetch user account: {}", response.status()));
        }

        response
            .json::<UserAccount>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn create_request(&self, payload: &SubmissionPayload) -> Result<HostResponse, String> {
        let response = Request::post(&self.url(NOBI_REQUESTS_PATH))
            .json(payload)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        Ok(submission_response(status, || async move {
            response
                .text()
                .await
                .map_err(|e| format!("Failed to read response: {}", e))
        })
        .await)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory host with canned responses and a POST counter
    pub(crate) struct FakeApi {
        pub companies: Result<Vec<ReferenceOption>, String>,
        pub categories: Result<Vec<ReferenceOption>, String>,
        pub user: Result<UserAccount, String>,
        pub submit_response: Result<HostResponse, String>,
        pub posts: Cell<usize>,
        pub last_payload: RefCell<Option<SubmissionPayload>>,
    }

    pub(crate) const COMPANY_LIST: u64 = 334341;

    impl Default for FakeApi {
        fn default() -> Self {
            Self {
                companies: Ok(vec![ReferenceOption::new("acme", "Acme Ltd")]),
                categories: Ok(vec![ReferenceOption::new("it", "IT Services")]),
                user: Ok(UserAccount {
                    given_name: "Ada".to_string(),
                    family_name: "Lovelace".to_string(),
                }),
                submit_response: Ok(HostResponse {
                    status: 201,
                    body: "{}".to_string(),
                }),
                posts: Cell::new(0),
                last_payload: RefCell::new(None),
            }
        }
    }

    impl HostApi for FakeApi {
        async fn fetch_reference_list(&self, list_type_id: u64) -> Result<Vec<ReferenceOption>, String> {
            if list_type_id == COMPANY_LIST {
                self.companies.clone()
            } else {
                self.categories.clone()
            }
        }

        async fn fetch_current_user(&self) -> Result<UserAccount, String> {
            self.user.clone()
        }

        async fn create_request(&self, payload: &SubmissionPayload) -> Result<HostResponse, String> {
            self.posts.set(self.posts.get() + 1);
            *self.last_payload.borrow_mut() = Some(payload.clone());
            self.submit_response.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nobi_request::gateway::SubmitOutcome;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_success_range() {
        let response = |status| HostResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(201).is_success());
        assert!(!response(199).is_success());
        assert!(!response(300).is_success());
        assert!(!response(400).is_success());
    }

    #[test]
    fn test_liferay_urls() {
        let api = LiferayApi::new(&HostSettings {
            auth_token: "tok".to_string(),
            ..HostSettings::default()
        });
        assert_eq!(
            api.url(&format!("{}/{}", LIST_TYPE_DEFINITIONS_PATH, 334341)),
            "/o/headless-admin-list-type/v1.0/list-type-definitions/334341?p_auth=tok"
        );
        assert_eq!(api.url(NOBI_REQUESTS_PATH), "/o/c/nobprequests/?p_auth=tok");
    }

    #[test]
    fn test_created_response_skips_body() {
        let reads = Cell::new(0);
        let response = block_on(submission_response(201, || async {
            reads.set(reads.get() + 1);
            Err::<String, _>("body stream failed".to_string())
        }));

        assert_eq!(reads.get(), 0);
        assert!(response.is_success());
        assert_eq!(
            SubmitOutcome::from_response(Ok(response)),
            SubmitOutcome::Succeeded
        );
    }

    #[test]
    fn test_unreadable_error_body_falls_back() {
        let response = block_on(submission_response(502, || async {
            Err::<String, _>("body stream failed".to_string())
        }));

        assert_eq!(response.status, 502);
        assert_eq!(response.body, "");
        assert_eq!(
            SubmitOutcome::from_response(Ok(response)),
            SubmitOutcome::Rejected("Unknown error".to_string())
        );
    }

    #[test]
    fn test_error_body_is_read() {
        let response = block_on(submission_response(400, || async {
            Ok::<_, String>(r#"{"message":"Missing vendor"}"#.to_string())
        }));

        assert_eq!(
            SubmitOutcome::from_response(Ok(response)),
            SubmitOutcome::Rejected("Missing vendor".to_string())
        );
    }
}
