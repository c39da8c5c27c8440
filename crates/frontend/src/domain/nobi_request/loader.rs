//! Mount-time data loading
//!
//! Companies, categories and the current user are requested concurrently and
//! joined; each result is handled on its own so one failure never blocks the
//! others or the loading gate.

use contracts::domain::common::ReferenceOption;
use contracts::shared::liferay::UserAccount;

use super::api::HostApi;
use super::state::NobiFormState;
use crate::shared::config::HostSettings;

pub const COMPANIES_ERROR: &str = "Error loading companies. Please refresh the page.";
pub const CATEGORIES_ERROR: &str = "Error loading NOBI categories. Please refresh the page.";

/// Settled results of the three mount-time requests
#[derive(Debug, Clone)]
pub struct InitialData {
    pub companies: Result<Vec<ReferenceOption>, String>,
    pub categories: Result<Vec<ReferenceOption>, String>,
    pub user: Result<UserAccount, String>,
}

/// Run the three requests concurrently and wait for all of them to settle
pub async fn load_initial_data<A: HostApi>(api: &A, host: &HostSettings) -> InitialData {
    let (companies, categories, user) = futures::join!(
        api.fetch_reference_list(host.company_list_id),
        api.fetch_reference_list(host.category_list_id),
        api.fetch_current_user(),
    );
    InitialData {
        companies,
        categories,
        user,
    }
}

impl NobiFormState {
    /// Store loaded data and open the loading gate
    pub fn apply_initial_data(&mut self, data: InitialData) {
        match data.companies {
            Ok(companies) => self.companies = companies,
            Err(e) => {
                log::error!("Error fetching companies: {}", e);
                self.company_error = Some(COMPANIES_ERROR.to_string());
            }
        }

        match data.categories {
            Ok(categories) => self.categories = categories,
            Err(e) => {
                log::error!("Error fetching NOBI categories: {}", e);
                self.category_error = Some(CATEGORIES_ERROR.to_string());
            }
        }

        // Prefill is best effort: on failure the fields stay blank for manual entry
        match data.user {
            Ok(user) => self.prefill_requestor(&user),
            Err(e) => log::error!("Error fetching user account: {}", e),
        }

        self.mark_loaded();
    }

    /// Copy the user's name into requestor fields the user has not filled yet
    fn prefill_requestor(&mut self, user: &UserAccount) {
        if self.record.requestor_first_name.is_empty() {
            self.record.requestor_first_name = user.given_name.clone();
        }
        if self.record.requestor_surname.is_empty() {
            self.record.requestor_surname = user.family_name.clone();
        }
    }

    /// The gate only ever opens
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }
}
