use chrono::Utc;
use contracts::domain::nobi_request::{AmountField, FormRecord, TextField};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::domain::nobi_request::api::LiferayApi;
use crate::domain::nobi_request::gateway;
use crate::domain::nobi_request::loader;
use crate::domain::nobi_request::state::NobiFormState;
use crate::domain::nobi_request::wizard::PageMove;
use crate::shared::config::FormConfig;
use crate::shared::theme;

/// ViewModel for the NOBI request form
#[derive(Clone, Copy)]
pub struct NobiFormViewModel {
    pub state: RwSignal<NobiFormState>,
    pub dark_mode: RwSignal<bool>,
    config: StoredValue<FormConfig>,
}

impl NobiFormViewModel {
    pub fn new(config: FormConfig) -> Self {
        let state = NobiFormState::new(FormRecord::blank_today(), config.form.clone());
        Self {
            state: RwSignal::new(state),
            dark_mode: RwSignal::new(theme::load_dark_mode()),
            config: StoredValue::new(config),
        }
    }

    fn api(&self) -> LiferayApi {
        self.config.with_value(|c| LiferayApi::new(&c.host))
    }

    /// Fetch lists and prefill, then open the loading gate
    pub fn load(&self) {
        let state = self.state;
        let api = self.api();
        let host = self.config.with_value(|c| c.host.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let data = loader::load_initial_data(&api, &host).await;
            state.try_update(|s| s.apply_initial_data(data));
        });
    }

    pub fn set_field(&self, field: TextField, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    /// Returns false when the mask rejected the text
    pub fn set_amount(&self, field: AmountField, raw: String) -> bool {
        let mut accepted = false;
        self.state.maybe_update(|s| {
            accepted = s.set_amount(field, &raw);
            accepted
        });
        accepted
    }

    pub fn select_company(&self, key: String) {
        self.state
            .maybe_update(|s| s.select_company(&key, js_sys::Math::random));
    }

    pub fn select_category(&self, key: String) {
        self.state.maybe_update(|s| s.select_category(&key));
    }

    pub fn dismiss_message(&self) {
        self.state.update(|s| s.dismiss_message());
    }

    pub fn go_next(&self) {
        if let Some(step) = self.state.try_update(|s| s.go_next()).flatten() {
            log::debug!("NOBI form moved to page {}", step.page);
            self.schedule_unlock(step);
        }
    }

    pub fn go_prev(&self) {
        if let Some(step) = self.state.try_update(|s| s.go_prev()).flatten() {
            log::debug!("NOBI form moved to page {}", step.page);
            self.schedule_unlock(step);
        }
    }

    /// Release the wizard lock taken by `step` once the transition delay has passed
    fn schedule_unlock(&self, step: PageMove) {
        let state = self.state;
        let delay = self.config.with_value(|c| c.form.transition_ms);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            state.try_maybe_update(|s| (s.finish_transition(step.ticket), ()));
        });
    }

    /// Submit the form; ignored while a submission is in flight
    pub fn submit_command(&self) {
        let Some(payload) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let state = self.state;
        let api = self.api();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = gateway::send(&api, &payload).await;
            state.try_update(|s| s.finish_submit(outcome, Utc::now().date_naive()));
        });
    }
}
