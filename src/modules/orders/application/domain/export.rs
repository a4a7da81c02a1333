use super::Order;

pub const EXPORT_HEADER: &str =
    "order_id,user_email,status,total,created_at,shipping_address,items";

/// Renders orders as CSV, one row per order, with the fixed header above.
/// Pure string formatting; the caller decides what set of orders to feed in.
pub fn orders_to_csv(orders: &[Order]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push_str("\r\n");

    for order in orders {
        let items = order
            .items
            .iter()
            .map(|item| {
                format!(
                    "{} x{}",
                    item.product_name.as_deref().unwrap_or(""),
                    item.quantity
                )
            })
            .collect::<Vec<_>>()
            .join("; ");

        let row = [
            order.id.to_string(),
            order.user_email.clone().unwrap_or_default(),
            order.status.as_str().to_string(),
            order.total.to_string(),
            order.created_at.to_rfc3339(),
            order.shipping_address.to_string(),
            items,
        ];

        let mut first = true;
        for field in row {
            if !first {
                out.push(',');
            }
            first = false;
            out.push_str(&quote(&field));
        }
        out.push_str("\r\n");
    }

    out
}

/// RFC 4180: fields containing commas, quotes or line breaks are wrapped in
/// double quotes, with embedded quotes doubled.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
