//! Fixed-layout text rendering of orders.

use crate::customer::Customers;
use crate::error::Result;
use crate::item::Catalog;
use crate::order::Order;

/// Rule printed at the top of every order block.
pub const SEPARATOR: &str = "===========================";

/// Renders one order as a text block.
///
/// Every customer and item the order references must be present in the
/// lookup tables, otherwise the lookup error is returned.
pub fn format_order(order: &Order, customers: &Customers, catalog: &Catalog) -> Result<String> {
    let customer = order.customer(customers)?;
    let total = order.total(catalog)?;

    let mut out = format!(
        "{sep}\n\
         Order #{id}, Date: {date}\n\
         Amount: ${total}, Paid by {payment}\n\
         \n\
         Customer ID #{customer_id}:\n\
         {name}, ph. {phone}, email: {email}\n\
         {street}\n\
         {city}, {state} {zip}\n\
         \n\
         Order Detail:\n",
        sep = SEPARATOR,
        id = order.id,
        date = order.date,
        total = total,
        payment = order.payment,
        customer_id = order.customer_id,
        name = customer.name,
        phone = customer.phone,
        email = customer.email,
        street = customer.street,
        city = customer.city,
        state = customer.state,
        zip = customer.zip,
    );

    for line_item in order.sorted_line_items() {
        let item = order.item(catalog, line_item.item_id)?;
        out.push_str(&format!(
            "\tItem {}: \"{}\", {} @ {}\n",
            item.id, item.description, line_item.quantity, item.price
        ));
    }

    Ok(out)
}

/// Renders every order, in the given order, each block followed by a blank line.
pub fn render_report(orders: &[Order], customers: &Customers, catalog: &Catalog) -> Result<String> {
    let mut report = String::new();
    for order in orders {
        report.push_str(&format_order(order, customers, catalog)?);
        report.push('\n');
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::load_customers;
    use crate::error::ReportError;
    use crate::item::load_items;
    use crate::order::load_orders;
    use std::io::Cursor;

    fn tables() -> (Customers, Catalog) {
        let customers = load_customers(Cursor::new(
            "7,Grace Hopper,1 Navy Yard,Arlington,VA,22202,555-0142,grace@example.com\n",
        ))
        .unwrap();
        let catalog =
            load_items(Cursor::new("1,Apples,4.00\n2,Milk,3.25\n3,Bread,2.5\n")).unwrap();
        (customers, catalog)
    }

    fn order(lines: &str) -> Order {
        load_orders(Cursor::new(lines)).unwrap().remove(0)
    }

    #[test]
    fn test_format_order_layout() {
        let (customers, catalog) = tables();
        let order = order("7,501,2024-03-15,3-1,1-2\n1,4111111111111111,12/29\n");

        let expected = "\
===========================
Order #501, Date: 2024-03-15
Amount: $10.50, Paid by Credit card 4111111111111111, exp. 12/29

Customer ID #7:
Grace Hopper, ph. 555-0142, email: grace@example.com
1 Navy Yard
Arlington, VA 22202

Order Detail:
\tItem 1: \"Apples\", 2 @ 4.00
\tItem 3: \"Bread\", 1 @ 2.50
";
        assert_eq!(format_order(&order, &customers, &catalog).unwrap(), expected);
    }

    #[test]
    fn test_detail_lines_sorted_by_item_id() {
        let (customers, catalog) = tables();
        let order = order("7,1,2024-01-01,3-1,2-1,1-1\n2,pp\n");
        let text = format_order(&order, &customers, &catalog).unwrap();

        let item_1 = text.find("Item 1:").unwrap();
        let item_2 = text.find("Item 2:").unwrap();
        let item_3 = text.find("Item 3:").unwrap();
        assert!(item_1 < item_2 && item_2 < item_3);
    }

    #[test]
    fn test_unknown_customer() {
        let (customers, catalog) = tables();
        let order = order("8,1,2024-01-01,1-1\n2,pp\n");
        assert!(matches!(
            format_order(&order, &customers, &catalog),
            Err(ReportError::UnknownCustomer { customer_id: 8, .. })
        ));
    }

    #[test]
    fn test_unknown_item() {
        let (customers, catalog) = tables();
        let order = order("7,1,2024-01-01,1-1,99-1\n2,pp\n");
        assert!(matches!(
            format_order(&order, &customers, &catalog),
            Err(ReportError::UnknownItem { item_id: 99, .. })
        ));
    }

    #[test]
    fn test_render_report_separates_blocks() {
        let (customers, catalog) = tables();
        let orders = load_orders(Cursor::new(
            "7,1,2024-01-01,1-1\n2,pp\n7,2,2024-01-02,2-1\n3,bank,acct\n",
        ))
        .unwrap();

        let report = render_report(&orders, &customers, &catalog).unwrap();
        let first = format_order(&orders[0], &customers, &catalog).unwrap();
        let second = format_order(&orders[1], &customers, &catalog).unwrap();
        assert_eq!(report, format!("{}\n{}\n", first, second));
        assert!(report.contains("Paid by Wire transfer from Bank ID bank, Account# acct"));
    }

    #[test]
    fn test_render_report_empty() {
        let (customers, catalog) = tables();
        assert_eq!(render_report(&[], &customers, &catalog).unwrap(), "");
    }
}
