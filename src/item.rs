//! Catalog items and the item lookup table.

use crate::error::{ReportError, Result};
use crate::input::{line_of, read_records};
use crate::lookup::{Keyed, LookupTable};
use crate::money::Money;
use log::{debug, info};
use serde::Deserialize;
use std::io::Read;

/// Item lookup table keyed by item id.
pub type Catalog = LookupTable<Item>;

/// A catalog entry as read from `items.txt`: `id,description,price`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: u32,
    pub description: String,
    /// Unit price, never negative.
    pub price: Money,
}

impl Item {
    /// Number of comma-separated fields on an item line.
    pub const FIELD_COUNT: usize = 3;
}

impl Keyed for Item {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Loads every catalog line from `reader`.
pub fn load_items<R: Read>(reader: R) -> Result<Catalog> {
    let mut items = Vec::new();

    for record in read_records(reader)? {
        let line = line_of(&record);
        let invalid = |message: String| ReportError::InvalidItem { line, message };

        if record.len() != Item::FIELD_COUNT {
            return Err(invalid(format!(
                "expected {} fields, found {}",
                Item::FIELD_COUNT,
                record.len()
            )));
        }

        let item: Item = record
            .deserialize(None)
            .map_err(|e| invalid(e.to_string()))?;
        if item.price.is_negative() {
            return Err(invalid(format!("negative price {}", item.price)));
        }
        debug!("Line {}: loaded item {} at {}", line, item.id, item.price);
        items.push(item);
    }

    let catalog = Catalog::from_records(items);
    info!("Loaded {} catalog items", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::str::FromStr;

    #[test]
    fn test_load_items() {
        let catalog = load_items(Cursor::new("1,Apples,4.00\n3,Bread,2.5\n")).unwrap();
        assert_eq!(catalog.len(), 2);

        let bread = catalog.get(3).unwrap();
        assert_eq!(bread.description, "Bread");
        assert_eq!(bread.price, Money::from_str("2.50").unwrap());
    }

    #[test]
    fn test_zero_price_allowed() {
        let catalog = load_items(Cursor::new("7,Free sample,0\n")).unwrap();
        assert_eq!(catalog.get(7).unwrap().price.to_string(), "0.00");
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = load_items(Cursor::new("1,Apples,-1.00\n")).unwrap_err();
        match err {
            ReportError::InvalidItem { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("negative price"));
            }
            other => panic!("Expected InvalidItem, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_price() {
        assert!(matches!(
            load_items(Cursor::new("1,Apples,cheap\n")),
            Err(ReportError::InvalidItem { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        assert!(matches!(
            load_items(Cursor::new("1,Apples\n")),
            Err(ReportError::InvalidItem { .. })
        ));
        assert!(matches!(
            load_items(Cursor::new("1,Apples, red,4.00\n")),
            Err(ReportError::InvalidItem { .. })
        ));
    }
}
