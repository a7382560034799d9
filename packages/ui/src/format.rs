//! Presentation helpers shared by the views.

use api::OrderStatus;

/// `$12.50`. Rounding happens here and nowhere else.
pub fn price(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let cents = (amount * 100.0).round();
    // `-0.0` and amounts that round to zero print unsigned.
    if cents < 0.0 {
        format!("-${:.2}", -cents / 100.0)
    } else {
        format!("${:.2}", cents.abs() / 100.0)
    }
}

/// Badge colours for an order status.
pub fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "bg-yellow-100 text-yellow-800",
        OrderStatus::Processing => "bg-blue-100 text-blue-800",
        OrderStatus::Shipped => "bg-purple-100 text-purple-800",
        OrderStatus::Delivered => "bg-green-100 text-green-800",
        OrderStatus::Cancelled => "bg-red-100 text-red-800",
    }
}

/// Stock line shown on product cards and the detail page.
pub fn stock_label(quantity: i64) -> String {
    match quantity {
        q if q <= 0 => "Out of stock".to_string(),
        1 => "1 in stock".to_string(),
        q => format!("{q} in stock"),
    }
}

/// Keep only the date part of a backend timestamp (`2026-01-19T10:30:00`).
pub fn date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) => ts.split('T').next().unwrap_or(ts).to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price() {
        assert_eq!(price(0.0), "$0.00");
        assert_eq!(price(12.5), "$12.50");
        assert_eq!(price(0.1 + 0.2), "$0.30");
        assert_eq!(price(-3.0), "-$3.00");
        assert_eq!(price(-0.0), "$0.00");
        assert_eq!(price(-0.001), "$0.00");
        assert_eq!(price(f64::NAN), "$0.00");
    }

    #[test]
    fn test_stock_label() {
        assert_eq!(stock_label(0), "Out of stock");
        assert_eq!(stock_label(-2), "Out of stock");
        assert_eq!(stock_label(1), "1 in stock");
        assert_eq!(stock_label(12), "12 in stock");
    }

    #[test]
    fn test_date() {
        assert_eq!(date(Some("2026-01-19T10:30:00")), "2026-01-19");
        assert_eq!(date(Some("2026-01-19")), "2026-01-19");
        assert_eq!(date(None), "-");
    }

    #[test]
    fn test_every_status_has_a_class() {
        for status in OrderStatus::ALL {
            assert!(status_class(status).starts_with("bg-"));
        }
    }
}
