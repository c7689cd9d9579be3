//! Orders, their line items, and the two-line order file parser.
//!
//! Each order occupies two consecutive lines of `orders.txt`:
//!
//! ```text
//! customer_id,order_id,YYYY-MM-DD,item_id-qty[,item_id-qty...]
//! payment_code,field1[,field2]
//! ```

use crate::customer::{Customer, Customers};
use crate::error::{ReportError, Result};
use crate::input::{field, line_of, read_records};
use crate::item::{Catalog, Item};
use crate::money::Money;
use crate::pairs::PairsExt;
use crate::payment::Payment;
use chrono::NaiveDate;
use csv::StringRecord;
use log::{debug, info, warn};
use std::io::Read;

/// Date format used on order lines.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One `(item id, quantity)` pair within an order.
///
/// Refers to a catalog item by id; it does not own the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub item_id: u32,
    /// Always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Parses an `item_id-quantity` token.
    fn parse(token: &str, line: u64) -> Result<Self> {
        let invalid = |message: String| ReportError::InvalidOrder { line, message };

        let (id_str, qty_str) = token
            .split_once('-')
            .ok_or_else(|| invalid(format!("line item {:?} is not item_id-quantity", token)))?;
        let item_id = id_str
            .trim()
            .parse()
            .map_err(|_| invalid(format!("item id {:?} is not a number", id_str)))?;
        let quantity: u32 = qty_str
            .trim()
            .parse()
            .map_err(|_| invalid(format!("quantity {:?} is not a number", qty_str)))?;
        if quantity == 0 {
            return Err(invalid(format!("item {} has zero quantity", item_id)));
        }

        Ok(LineItem { item_id, quantity })
    }

    /// `quantity × unit_price`.
    pub fn subtotal(&self, unit_price: Money) -> Money {
        unit_price * self.quantity
    }
}

/// A customer order.
///
/// Line items are kept in the order they appeared on the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub date: NaiveDate,
    pub customer_id: u32,
    pub line_items: Vec<LineItem>,
    pub payment: Payment,
}

impl Order {
    /// Builds an order from its header line and payment line.
    pub fn from_records(header: &StringRecord, payment: &StringRecord) -> Result<Self> {
        let line = line_of(header);
        let invalid = |message: String| ReportError::InvalidOrder { line, message };

        if header.len() < 4 {
            return Err(invalid(format!(
                "expected customer id, order id, date and at least one line item, found {} fields",
                header.len()
            )));
        }

        let customer_id = parse_id(field(header, 0), "customer id").map_err(invalid)?;
        let id = parse_id(field(header, 1), "order id").map_err(invalid)?;

        let date_str = field(header, 2);
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
            ReportError::InvalidDate {
                line,
                value: date_str.to_string(),
            }
        })?;

        let line_items = header
            .iter()
            .skip(3)
            .map(|token| LineItem::parse(token, line))
            .collect::<Result<Vec<_>>>()?;

        let payment = Payment::from_record(payment)?;

        Ok(Order {
            id,
            date,
            customer_id,
            line_items,
            payment,
        })
    }

    /// Looks up the ordering customer.
    pub fn customer<'c>(&self, customers: &'c Customers) -> Result<&'c Customer> {
        customers
            .get(self.customer_id)
            .ok_or(ReportError::UnknownCustomer {
                order_id: self.id,
                customer_id: self.customer_id,
            })
    }

    /// Looks up a catalog item referenced by this order.
    pub fn item<'c>(&self, catalog: &'c Catalog, item_id: u32) -> Result<&'c Item> {
        catalog.get(item_id).ok_or(ReportError::UnknownItem {
            order_id: self.id,
            item_id,
        })
    }

    /// Sum of every line item's subtotal.
    pub fn total(&self, catalog: &Catalog) -> Result<Money> {
        self.line_items.iter().try_fold(Money::ZERO, |total, li| {
            let item = self.item(catalog, li.item_id)?;
            Ok(total + li.subtotal(item.price))
        })
    }

    /// Line items sorted by ascending item id.
    ///
    /// Items sharing an id keep their input order.
    pub fn sorted_line_items(&self) -> Vec<LineItem> {
        let mut sorted = self.line_items.clone();
        sorted.sort_by_key(|li| li.item_id);
        sorted
    }
}

fn parse_id(value: &str, what: &str) -> std::result::Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("{} {:?} is not a number", what, value))
}

/// Loads every order from `reader`, in file order.
///
/// A final line without a payment line is dropped with a warning.
/// Any malformed pair aborts the load.
pub fn load_orders<R: Read>(reader: R) -> Result<Vec<Order>> {
    let records = read_records(reader)?;
    let mut pairs = records.iter().pairs();
    let mut orders = Vec::new();

    for (header, payment) in pairs.by_ref() {
        let order = Order::from_records(header, payment)?;
        debug!(
            "Line {}: parsed order #{} with {} line items",
            line_of(header),
            order.id,
            order.line_items.len()
        );
        orders.push(order);
    }

    if let Some(trailing) = pairs.remainder() {
        warn!(
            "Line {}: order line has no payment line, ignoring",
            line_of(trailing)
        );
    }

    info!("Loaded {} orders", orders.len());
    Ok(orders)
}
