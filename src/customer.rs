//! Customer records and the customer lookup table.

use crate::error::{ReportError, Result};
use crate::input::{line_of, read_records};
use crate::lookup::{Keyed, LookupTable};
use log::{debug, info};
use serde::Deserialize;
use std::io::Read;

/// Customer lookup table keyed by customer id.
pub type Customers = LookupTable<Customer>;

/// A customer as read from `customers.txt`.
///
/// Fields are positional: `id,name,street,city,state,zip,phone,email`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl Customer {
    /// Number of comma-separated fields on a customer line.
    pub const FIELD_COUNT: usize = 8;
}

impl Keyed for Customer {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Loads every customer line from `reader`.
///
/// The first malformed line aborts the load.
pub fn load_customers<R: Read>(reader: R) -> Result<Customers> {
    let mut customers = Vec::new();

    for record in read_records(reader)? {
        let line = line_of(&record);
        if record.len() != Customer::FIELD_COUNT {
            return Err(ReportError::InvalidCustomer {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    Customer::FIELD_COUNT,
                    record.len()
                ),
            });
        }

        let customer: Customer = record
            .deserialize(None)
            .map_err(|e| ReportError::InvalidCustomer {
                line,
                message: e.to_string(),
            })?;
        debug!("Line {}: loaded customer {}", line, customer.id);
        customers.push(customer);
    }

    let table = Customers::from_records(customers);
    info!("Loaded {} customers", table.len());
    Ok(table)
}
