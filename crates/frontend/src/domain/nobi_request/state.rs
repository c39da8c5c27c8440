//! Form state controller
//!
//! Owns the record under edit, the loaded reference lists, the wizard and
//! the submission flags. Plain data: the view model keeps it in a signal and
//! every mutation goes through the methods below.

use contracts::domain::common::ReferenceOption;
use contracts::domain::nobi_request::{
    accepts_amount_input, validate_amount, AmountError, AmountField, FormRecord, TextField,
};

use super::wizard::{PageMove, Wizard};
use crate::shared::config::FormSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Banner shown above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NobiFormState {
    pub(super) record: FormRecord,
    pub(super) companies: Vec<ReferenceOption>,
    pub(super) categories: Vec<ReferenceOption>,
    pub(super) company_error: Option<String>,
    pub(super) category_error: Option<String>,
    pub(super) wizard: Wizard,
    pub(super) loaded: bool,
    pub(super) submitting: bool,
    pub(super) message: Option<FormMessage>,
    pub(super) settings: FormSettings,
}

impl NobiFormState {
    pub fn new(record: FormRecord, settings: FormSettings) -> Self {
        Self {
            record,
            companies: Vec::new(),
            categories: Vec::new(),
            company_error: None,
            category_error: None,
            wizard: Wizard::new(),
            loaded: false,
            submitting: false,
            message: None,
            settings,
        }
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn companies(&self) -> &[ReferenceOption] {
        &self.companies
    }

    pub fn categories(&self) -> &[ReferenceOption] {
        &self.categories
    }

    pub fn company_error(&self) -> Option<&str> {
        self.company_error.as_deref()
    }

    pub fn category_error(&self) -> Option<&str> {
        self.category_error.as_deref()
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Completion percentage over the 20 tracked fields
    pub fn progress(&self) -> u8 {
        self.record.progress()
    }

    /// Hint for an amount field; never blocks submission
    pub fn amount_hint(&self, field: AmountField) -> Option<AmountError> {
        validate_amount(self.record.amount(field)).err()
    }

    // ------------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------------

    /// Replace one free-text field
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        *self.record.text_mut(field) = value.into();
    }

    /// Store amount text if it passes the input mask; returns whether it was kept
    pub fn set_amount(&mut self, field: AmountField, raw: &str) -> bool {
        if !accepts_amount_input(raw) {
            return false;
        }
        *self.record.amount_mut(field) = raw.to_string();
        true
    }

    /// Select a company by key; unknown keys leave the selection untouched
    ///
    /// With `autofill_company_number` enabled the company number is replaced
    /// by a 4-digit value derived from `random` (expected in `[0, 1)`).
    pub fn select_company(&mut self, key: &str, random: impl FnOnce() -> f64) -> bool {
        let Some(company) = ReferenceOption::find(&self.companies, key).cloned() else {
            return false;
        };
        self.record.company = company;
        if self.settings.autofill_company_number {
            self.record.company_number = company_number_from(random());
        }
        true
    }

    /// Select a category by key; unknown keys leave the selection untouched
    pub fn select_category(&mut self, key: &str) -> bool {
        let Some(category) = ReferenceOption::find(&self.categories, key).cloned() else {
            return false;
        };
        self.record.category = category;
        true
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    // ------------------------------------------------------------------------
    // Wizard
    // ------------------------------------------------------------------------

    pub fn go_next(&mut self) -> Option<PageMove> {
        self.wizard.go_next()
    }

    pub fn go_prev(&mut self) -> Option<PageMove> {
        self.wizard.go_prev()
    }

    pub fn finish_transition(&mut self, ticket: u32) -> bool {
        self.wizard.finish_transition(ticket)
    }
}

/// Pseudo-random company number in 1000..=9999
fn company_number_from(random: f64) -> String {
    let offset = (random.clamp(0.0, 1.0) * 9000.0).floor() as u32;
    (1000 + offset.min(8999)).to_string()
}
