use serde::Serialize;

use crate::models::hotel::Hotel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedHotelData {
    pub price: String,
    pub rating: String,
    pub value_score: String,
}

fn group_thousands(integer_digits: &str) -> String {
    let len = integer_digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Two decimals with thousands separators, e.g. `1,234.50 USD`.
pub fn format_price(price: f64, currency: Option<&str>) -> String {
    let fixed = format!("{:.2}", price);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    let formatted = format!("{}{}.{}", sign, group_thousands(integer), fraction);

    match currency {
        Some(code) if !code.is_empty() => format!("{} {}", formatted, code),
        _ => formatted,
    }
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

pub fn format_value_score(value_score: f64) -> String {
    format!("{:.4}", value_score)
}

pub fn format_number(num: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, num)
}

/// Display strings for one table row. A missing score shows as zero.
pub fn format_hotel_data(hotel: &Hotel) -> FormattedHotelData {
    FormattedHotelData {
        price: format_price(hotel.price, Some(&hotel.currency)),
        rating: format_rating(hotel.rating),
        value_score: format_value_score(hotel.ranking_score()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_has_two_decimals_and_optional_currency() {
        assert_eq!(format_price(100.0, None), "100.00");
        assert_eq!(format_price(100.0, Some("USD")), "100.00 USD");
        assert_eq!(format_price(123.456, Some("EUR")), "123.46 EUR");
        assert_eq!(format_price(0.5, Some("JPY")), "0.50 JPY");
        assert_eq!(format_price(0.0, None), "0.00");
        assert_eq!(format_price(-50.0, Some("USD")), "-50.00 USD");
    }

    #[test]
    fn price_groups_thousands() {
        assert_eq!(format_price(1000.0, None), "1,000.00");
        assert_eq!(format_price(999.0, None), "999.00");
        assert_eq!(format_price(1234567.89, Some("USD")), "1,234,567.89 USD");
        assert_eq!(format_price(-25000.0, None), "-25,000.00");
    }

    #[test]
    fn rating_and_score_precision() {
        assert_eq!(format_rating(8.5), "8.5");
        assert_eq!(format_rating(8.46), "8.5");
        assert_eq!(format_rating(8.44), "8.4");
        assert_eq!(format_rating(9.0), "9.0");
        assert_eq!(format_value_score(1.0), "1.0000");
        assert_eq!(format_value_score(0.05), "0.0500");
        assert_eq!(format_value_score(0.0), "0.0000");
    }

    #[test]
    fn number_uses_requested_precision() {
        assert_eq!(format_number(3.14159, 2), "3.14");
        assert_eq!(format_number(3.14159, 3), "3.142");
        assert_eq!(format_number(100.0, 0), "100");
        assert_eq!(format_number(0.999, 0), "1");
        assert_eq!(format_number(-0.5, 1), "-0.5");
        assert_eq!(format_number(9007199254740991.0, 2), "9007199254740991.00");
    }

    #[test]
    fn hotel_row_formatting() {
        let hotel = Hotel {
            name: "Park Inn".to_string(),
            price: 150.0,
            rating: 9.2,
            currency: "EUR".to_string(),
            value_score: None,
        };

        assert_eq!(
            format_hotel_data(&hotel),
            FormattedHotelData {
                price: "150.00 EUR".to_string(),
                rating: "9.2".to_string(),
                value_score: "0.0000".to_string(),
            }
        );
    }
}
