//! Input and output file locations.

use std::path::{Path, PathBuf};

pub const CUSTOMERS_FILE: &str = "customers.txt";
pub const ITEMS_FILE: &str = "items.txt";
pub const ORDERS_FILE: &str = "orders.txt";
pub const REPORT_FILE: &str = "order_report.txt";

/// Paths of the three input files and the report file.
///
/// The default points at the fixed file names in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub customers: PathBuf,
    pub items: PathBuf,
    pub orders: PathBuf,
    pub report: PathBuf,
}

impl ReportPaths {
    /// The fixed file names resolved under `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        ReportPaths {
            customers: dir.join(CUSTOMERS_FILE),
            items: dir.join(ITEMS_FILE),
            orders: dir.join(ORDERS_FILE),
            report: dir.join(REPORT_FILE),
        }
    }
}

impl Default for ReportPaths {
    fn default() -> Self {
        ReportPaths {
            customers: PathBuf::from(CUSTOMERS_FILE),
            items: PathBuf::from(ITEMS_FILE),
            orders: PathBuf::from(ORDERS_FILE),
            report: PathBuf::from(REPORT_FILE),
        }
    }
}
