use chrono::{NaiveDate, Utc};

use super::amount::parse_amount_or_zero;
use crate::domain::common::ReferenceOption;

/// Number of fields counted by the completion progress
pub const TRACKED_FIELD_COUNT: usize = 20;

// ============================================================================
// Form record
// ============================================================================

/// The NOBI request under edit
///
/// Amounts are kept as the text the user typed; they only become numbers in
/// the submission payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRecord {
    pub requestor_first_name: String,
    pub requestor_surname: String,
    pub company: ReferenceOption,
    pub company_number: String,
    pub contact_number: String,
    pub cost_centre: String,
    /// Ledger date, `YYYY-MM-DD`
    pub date: String,
    pub general_ledger_to_be_charged: String,
    pub line_manager_fullname: String,
    pub requesting_department_store: String,
    pub sap_vendor_name: String,
    pub sap_vendor_number: String,
    pub vendor_name: String,
    pub vendor_address_details: String,
    pub category: ReferenceOption,
    pub multiple_bank_account_number_to_be_used: String,
    /// Currency code, e.g. "GBP"
    pub currency: String,
    pub invoice_net_amount: String,
    pub invoice_vat_amount: String,
    pub total_price: String,
}

impl FormRecord {
    /// All-blank record with the date prefilled
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            requestor_first_name: String::new(),
            requestor_surname: String::new(),
            company: ReferenceOption::empty(),
            company_number: String::new(),
            contact_number: String::new(),
            cost_centre: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            general_ledger_to_be_charged: String::new(),
            line_manager_fullname: String::new(),
            requesting_department_store: String::new(),
            sap_vendor_name: String::new(),
            sap_vendor_number: String::new(),
            vendor_name: String::new(),
            vendor_address_details: String::new(),
            category: ReferenceOption::empty(),
            multiple_bank_account_number_to_be_used: String::new(),
            currency: String::new(),
            invoice_net_amount: String::new(),
            invoice_vat_amount: String::new(),
            total_price: String::new(),
        }
    }

    /// Blank record dated today (UTC)
    pub fn blank_today() -> Self {
        Self::blank(Utc::now().date_naive())
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::RequestorFirstName => &self.requestor_first_name,
            TextField::RequestorSurname => &self.requestor_surname,
            TextField::CompanyNumber => &self.company_number,
            TextField::ContactNumber => &self.contact_number,
            TextField::CostCentre => &self.cost_centre,
            TextField::Date => &self.date,
            TextField::GeneralLedgerToBeCharged => &self.general_ledger_to_be_charged,
            TextField::LineManagerFullname => &self.line_manager_fullname,
            TextField::RequestingDepartmentStore => &self.requesting_department_store,
            TextField::SapVendorName => &self.sap_vendor_name,
            TextField::SapVendorNumber => &self.sap_vendor_number,
            TextField::VendorName => &self.vendor_name,
            TextField::VendorAddressDetails => &self.vendor_address_details,
            TextField::MultipleBankAccountNumberToBeUsed => {
                &self.multiple_bank_account_number_to_be_used
            }
            TextField::Currency => &self.currency,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::RequestorFirstName => &mut self.requestor_first_name,
            TextField::RequestorSurname => &mut self.requestor_surname,
            TextField::CompanyNumber => &mut self.company_number,
            TextField::ContactNumber => &mut self.contact_number,
            TextField::CostCentre => &mut self.cost_centre,
            TextField::Date => &mut self.date,
            TextField::GeneralLedgerToBeCharged => &mut self.general_ledger_to_be_charged,
            TextField::LineManagerFullname => &mut self.line_manager_fullname,
            TextField::RequestingDepartmentStore => &mut self.requesting_department_store,
            TextField::SapVendorName => &mut self.sap_vendor_name,
            TextField::SapVendorNumber => &mut self.sap_vendor_number,
            TextField::VendorName => &mut self.vendor_name,
            TextField::VendorAddressDetails => &mut self.vendor_address_details,
            TextField::MultipleBankAccountNumberToBeUsed => {
                &mut self.multiple_bank_account_number_to_be_used
            }
            TextField::Currency => &mut self.currency,
        }
    }

    pub fn amount(&self, field: AmountField) -> &str {
        match field {
            AmountField::InvoiceNetAmount => &self.invoice_net_amount,
            AmountField::InvoiceVatAmount => &self.invoice_vat_amount,
            AmountField::TotalPrice => &self.total_price,
        }
    }

    pub fn amount_mut(&mut self, field: AmountField) -> &mut String {
        match field {
            AmountField::InvoiceNetAmount => &mut self.invoice_net_amount,
            AmountField::InvoiceVatAmount => &mut self.invoice_vat_amount,
            AmountField::TotalPrice => &mut self.total_price,
        }
    }

    /// Count of tracked fields that are filled in
    ///
    /// Text fields count when non-empty (whitespace included), pickers when a
    /// key is selected, amounts when their parsed value is above zero.
    pub fn completed_fields(&self) -> usize {
        let text = TextField::ALL
            .iter()
            .filter(|f| !self.text(**f).is_empty())
            .count();
        let pickers = [&self.company, &self.category]
            .iter()
            .filter(|o| o.is_selected())
            .count();
        let amounts = AmountField::ALL
            .iter()
            .filter(|f| parse_amount_or_zero(self.amount(**f)) > 0.0)
            .count();
        text + pickers + amounts
    }

    /// Completion percentage, `round(100 * completed / 20)`
    pub fn progress(&self) -> u8 {
        let ratio = self.completed_fields() as f64 / TRACKED_FIELD_COUNT as f64;
        (ratio * 100.0).round() as u8
    }
}

// ============================================================================
// Field names
// ============================================================================

/// Free-text fields of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    RequestorFirstName,
    RequestorSurname,
    CompanyNumber,
    ContactNumber,
    CostCentre,
    Date,
    GeneralLedgerToBeCharged,
    LineManagerFullname,
    RequestingDepartmentStore,
    SapVendorName,
    SapVendorNumber,
    VendorName,
    VendorAddressDetails,
    MultipleBankAccountNumberToBeUsed,
    Currency,
}

impl TextField {
    pub const ALL: [TextField; 15] = [
        TextField::RequestorFirstName,
        TextField::RequestorSurname,
        TextField::CompanyNumber,
        TextField::ContactNumber,
        TextField::CostCentre,
        TextField::Date,
        TextField::GeneralLedgerToBeCharged,
        TextField::LineManagerFullname,
        TextField::RequestingDepartmentStore,
        TextField::SapVendorName,
        TextField::SapVendorNumber,
        TextField::VendorName,
        TextField::VendorAddressDetails,
        TextField::MultipleBankAccountNumberToBeUsed,
        TextField::Currency,
    ];

    /// Element id, also the camelCase wire name
    pub fn id(&self) -> &'static str {
        match self {
            TextField::RequestorFirstName => "requestorFirstName",
            TextField::RequestorSurname => "requestorSurname",
            TextField::CompanyNumber => "companyNumber",
            TextField::ContactNumber => "contactNumber",
            TextField::CostCentre => "costCentre",
            TextField::Date => "date",
            TextField::GeneralLedgerToBeCharged => "generalLedgerToBeCharged",
            TextField::LineManagerFullname => "lineManagerFullname",
            TextField::RequestingDepartmentStore => "requestingDepartmentStore",
            TextField::SapVendorName => "sAPVendorName",
            TextField::SapVendorNumber => "sAPVendorNumber",
            TextField::VendorName => "vendorName",
            TextField::VendorAddressDetails => "vendorAddressDetails",
            TextField::MultipleBankAccountNumberToBeUsed => "multipleBankAccountNumberToBeUsed",
            TextField::Currency => "currency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextField::RequestorFirstName => "Requestor First Name",
            TextField::RequestorSurname => "Requestor Surname",
            TextField::CompanyNumber => "Company Number",
            TextField::ContactNumber => "Contact Number",
            TextField::CostCentre => "Cost Centre",
            TextField::Date => "Date",
            TextField::GeneralLedgerToBeCharged => "General Ledger To Be Charged",
            TextField::LineManagerFullname => "Line Manager Full Name",
            TextField::RequestingDepartmentStore => "Requesting Department / Store",
            TextField::SapVendorName => "SAP Vendor Name",
            TextField::SapVendorNumber => "SAP Vendor Number",
            TextField::VendorName => "Vendor Name",
            TextField::VendorAddressDetails => "Vendor Address Details",
            TextField::MultipleBankAccountNumberToBeUsed => {
                "Multiple Bank Account Number To Be Used"
            }
            TextField::Currency => "Currency",
        }
    }
}

/// Money amount fields of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountField {
    InvoiceNetAmount,
    InvoiceVatAmount,
    TotalPrice,
}

impl AmountField {
    pub const ALL: [AmountField; 3] = [
        AmountField::InvoiceNetAmount,
        AmountField::InvoiceVatAmount,
        AmountField::TotalPrice,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AmountField::InvoiceNetAmount => "invoiceNetAmount",
            AmountField::InvoiceVatAmount => "invoiceVatAmount",
            AmountField::TotalPrice => "totalPrice",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AmountField::InvoiceNetAmount => "Invoice Net Amount",
            AmountField::InvoiceVatAmount => "Invoice VAT Amount",
            AmountField::TotalPrice => "Total Price",
        }
    }
}
