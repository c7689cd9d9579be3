//! Report driver.
//!
//! Loads customers, catalog items and orders (in that order), then renders
//! the report. The whole report is built in memory before anything is
//! written, so a failing order never leaves a truncated report behind.

use crate::config::ReportPaths;
use crate::customer::{load_customers, Customers};
use crate::error::{ReportError, Result};
use crate::item::{load_items, Catalog};
use crate::order::{load_orders, Order};
use crate::report::render_report;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Loaded inputs ready for rendering.
///
/// Lookup tables and orders are read-only once loaded.
#[derive(Debug)]
pub struct ReportEngine {
    customers: Customers,
    catalog: Catalog,
    orders: Vec<Order>,
}

impl ReportEngine {
    /// Loads the three input files named by `paths`.
    ///
    /// Each file is fully read and closed before the next one is opened.
    pub fn load(paths: &ReportPaths) -> Result<Self> {
        let customers = load_customers(open(&paths.customers)?)?;
        let catalog = load_items(open(&paths.items)?)?;
        let orders = load_orders(open(&paths.orders)?)?;

        Ok(ReportEngine {
            customers,
            catalog,
            orders,
        })
    }

    /// Loads the inputs from already-open readers.
    pub fn from_readers<C, I, O>(customers: C, items: I, orders: O) -> Result<Self>
    where
        C: Read,
        I: Read,
        O: Read,
    {
        Ok(ReportEngine {
            customers: load_customers(customers)?,
            catalog: load_items(items)?,
            orders: load_orders(orders)?,
        })
    }

    pub fn customers(&self) -> &Customers {
        &self.customers
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Renders the full report text.
    pub fn render(&self) -> Result<String> {
        let report = render_report(&self.orders, &self.customers, &self.catalog)?;
        info!("Rendered {} orders", self.orders.len());
        Ok(report)
    }

    /// Renders the report and writes it to `writer`.
    pub fn write_output<W: Write>(&self, mut writer: W) -> Result<()> {
        let report = self.render()?;
        writer.write_all(report.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Renders the report and only then creates the file at `path`.
    pub fn write_report(&self, path: &Path) -> Result<()> {
        let report = self.render()?;
        let mut file = File::create(path).map_err(|source| ReportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        file.write_all(report.as_bytes())?;
        info!("Wrote report to {}", path.display());
        Ok(())
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| ReportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
