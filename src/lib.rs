//! # Order Report
//!
//! Parses flat comma-separated files describing customers, catalog items
//! and orders, and renders a fixed-layout text report of every order.
//!
//! ## Design Principles
//!
//! - **Fixed-point money**: prices and totals use `rust_decimal`, rendered with 2 places
//! - **Load once, read only**: customers and items live in id-keyed lookup tables
//! - **Closed payment set**: payment methods are an enum; unknown codes are parse errors
//! - **All or nothing**: the report is rendered in memory before the file is written
//!
//! ## Example
//!
//! ```
//! use order_report::ReportEngine;
//! use std::io::Cursor;
//!
//! let customers = "1,Ada,12 Main St,Springfield,IL,62701,555-0100,ada@example.com\n";
//! let items = "1,Apples,4.00\n";
//! let orders = "1,1001,2024-03-15,1-2\n2,ada-paypal\n";
//!
//! let engine = ReportEngine::from_readers(
//!     Cursor::new(customers),
//!     Cursor::new(items),
//!     Cursor::new(orders),
//! )
//! .unwrap();
//! let report = engine.render().unwrap();
//! assert!(report.contains("Amount: $8.00, Paid by PayPal ID: ada-paypal"));
//! ```

pub mod config;
pub mod customer;
pub mod engine;
pub mod error;
pub mod input;
pub mod item;
pub mod lookup;
pub mod money;
pub mod order;
pub mod pairs;
pub mod payment;
pub mod report;

pub use config::ReportPaths;
pub use customer::{load_customers, Customer, Customers};
pub use engine::ReportEngine;
pub use error::{ReportError, Result};
pub use item::{load_items, Catalog, Item};
pub use lookup::{Keyed, LookupTable};
pub use money::Money;
pub use order::{load_orders, LineItem, Order};
pub use payment::Payment;
pub use report::{format_order, render_report};
