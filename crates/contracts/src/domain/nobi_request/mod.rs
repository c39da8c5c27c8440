//! NOBI request form: record, amounts, currencies and the submission payload

pub mod aggregate;
pub mod amount;
pub mod currency;
pub mod payload;

pub use aggregate::{AmountField, FormRecord, TextField, TRACKED_FIELD_COUNT};
pub use amount::{accepts_amount_input, parse_amount_or_zero, validate_amount, AmountError, MAX_AMOUNT};
pub use currency::CurrencyOption;
pub use payload::SubmissionPayload;
