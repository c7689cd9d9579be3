//! Payment methods attached to an order.

use crate::error::{ReportError, Result};
use crate::input::{field, line_of};
use csv::StringRecord;
use std::fmt;

/// How an order was paid.
///
/// The payment line selects a variant with a leading numeric code:
/// `1` credit card, `2` PayPal, `3` wire transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payment {
    CreditCard {
        card_number: String,
        expiration: String,
    },
    PayPal {
        paypal_id: String,
    },
    WireTransfer {
        bank_id: String,
        account_id: String,
    },
}

impl Payment {
    pub const CREDIT_CARD_CODE: u32 = 1;
    pub const PAYPAL_CODE: u32 = 2;
    pub const WIRE_TRANSFER_CODE: u32 = 3;

    /// Numeric code this variant is selected by.
    pub fn code(&self) -> u32 {
        match self {
            Payment::CreditCard { .. } => Self::CREDIT_CARD_CODE,
            Payment::PayPal { .. } => Self::PAYPAL_CODE,
            Payment::WireTransfer { .. } => Self::WIRE_TRANSFER_CODE,
        }
    }

    /// Parses a payment line: `code,field1[,field2]`.
    ///
    /// Fields beyond what the variant needs are ignored.
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        let line = line_of(record);
        let code_str = field(record, 0);
        let code: u32 = code_str.parse().map_err(|_| ReportError::InvalidPayment {
            line,
            message: format!("payment code {:?} is not a number", code_str),
        })?;

        let required = match code {
            Self::CREDIT_CARD_CODE | Self::WIRE_TRANSFER_CODE => 2,
            Self::PAYPAL_CODE => 1,
            _ => return Err(ReportError::UnknownPaymentCode { line, code }),
        };
        let provided = record.len().saturating_sub(1);
        if provided < required {
            return Err(ReportError::InvalidPayment {
                line,
                message: format!(
                    "payment code {} needs {} fields, found {}",
                    code, required, provided
                ),
            });
        }

        let first = field(record, 1).to_string();
        let second = field(record, 2).to_string();
        Ok(match code {
            Self::CREDIT_CARD_CODE => Payment::CreditCard {
                card_number: first,
                expiration: second,
            },
            Self::PAYPAL_CODE => Payment::PayPal { paypal_id: first },
            _ => Payment::WireTransfer {
                bank_id: first,
                account_id: second,
            },
        })
    }
}

/// Renders the "Paid by" description used in the report.
impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payment::CreditCard {
                card_number,
                expiration,
            } => write!(f, "Credit card {}, exp. {}", card_number, expiration),
            Payment::PayPal { paypal_id } => write!(f, "PayPal ID: {}", paypal_id),
            Payment::WireTransfer {
                bank_id,
                account_id,
            } => write!(
                f,
                "Wire transfer from Bank ID {}, Account# {}",
                bank_id, account_id
            ),
        }
    }
}
