use serde::{Deserialize, Serialize};

use super::aggregate::FormRecord;
use super::amount::parse_amount_or_zero;
use super::currency::CurrencyOption;
use crate::domain::common::ReferenceOption;

/// Body of the record-creation POST
///
/// Same fields as `FormRecord`, with the currency translated to its symbol and
/// the amounts coerced to numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub company: ReferenceOption,
    pub company_number: String,
    pub contact_number: String,
    pub cost_centre: String,
    pub currency: String,
    pub date: String,
    pub general_ledger_to_be_charged: String,
    pub invoice_net_amount: f64,
    pub invoice_vat_amount: f64,
    pub line_manager_fullname: String,
    pub multiple_bank_account_number_to_be_used: String,
    #[serde(rename = "nOBICategory")]
    pub nobi_category: ReferenceOption,
    pub requesting_department_store: String,
    pub requestor_first_name: String,
    pub requestor_surname: String,
    #[serde(rename = "sAPVendorName")]
    pub sap_vendor_name: String,
    #[serde(rename = "sAPVendorNumber")]
    pub sap_vendor_number: String,
    pub total_price: f64,
    pub vendor_address_details: String,
    pub vendor_name: String,
}

impl From<&FormRecord> for SubmissionPayload {
    fn from(record: &FormRecord) -> Self {
        Self {
            company: record.company.clone(),
            company_number: record.company_number.clone(),
            contact_number: record.contact_number.clone(),
            cost_centre: record.cost_centre.clone(),
            currency: CurrencyOption::symbol_for(&record.currency).to_string(),
            date: record.date.clone(),
            general_ledger_to_be_charged: record.general_ledger_to_be_charged.clone(),
            invoice_net_amount: parse_amount_or_zero(&record.invoice_net_amount),
            invoice_vat_amount: parse_amount_or_zero(&record.invoice_vat_amount),
            line_manager_fullname: record.line_manager_fullname.clone(),
            multiple_bank_account_number_to_be_used: record
                .multiple_bank_account_number_to_be_used
                .clone(),
            nobi_category: record.category.clone(),
            requesting_department_store: record.requesting_department_store.clone(),
            requestor_first_name: record.requestor_first_name.clone(),
            requestor_surname: record.requestor_surname.clone(),
            sap_vendor_name: record.sap_vendor_name.clone(),
            sap_vendor_number: record.sap_vendor_number.clone(),
            total_price: parse_amount_or_zero(&record.total_price),
            vendor_address_details: record.vendor_address_details.clone(),
            vendor_name: record.vendor_name.clone(),
        }
    }
}
