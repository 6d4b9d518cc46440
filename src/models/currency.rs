use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
}

const fn currency(code: &'static str, name: &'static str) -> Currency {
    Currency { code, name }
}

/// Currencies offered by the hotel form. Codes are labels only; prices in
/// different currencies are never converted.
pub const CURRENCIES: [Currency; 52] = [
    currency("AED", "United Arab Emirates Dirham"),
    currency("ARS", "Argentine Peso"),
    currency("AUD", "Australian Dollar"),
    currency("AZN", "Azerbaijani Manat"),
    currency("BHD", "Bahraini Dinar"),
    currency("BGN", "Bulgarian Lev"),
    currency("BRL", "Brazilian Real"),
    currency("CAD", "Canadian Dollar"),
    currency("CHF", "Swiss Franc"),
    currency("CLP", "Chilean Peso"),
    currency("CNY", "Chinese Yuan"),
    currency("COP", "Colombian Peso"),
    currency("CZK", "Czech Koruna"),
    currency("DKK", "Danish Krone"),
    currency("EGP", "Egyptian Pound"),
    currency("EUR", "Euro"),
    currency("FJD", "Fijian Dollar"),
    currency("GBP", "Pound Sterling"),
    currency("GEL", "Georgian Lari"),
    currency("HKD", "Hong Kong Dollar"),
    currency("HUF", "Hungarian Forint"),
    currency("IDR", "Indonesian Rupiah"),
    currency("ILS", "Israeli New Shekel"),
    currency("INR", "Indian Rupee"),
    currency("ISK", "Icelandic Króna"),
    currency("JPY", "Japanese Yen"),
    currency("JOD", "Jordanian Dinar"),
    currency("KRW", "South Korean Won"),
    currency("KWD", "Kuwaiti Dinar"),
    currency("KZT", "Kazakhstani Tenge"),
    currency("MDL", "Moldovan Leu"),
    currency("MOP", "Macanese Pataca"),
    currency("MXN", "Mexican Peso"),
    currency("MYR", "Malaysian Ringgit"),
    currency("NAD", "Namibian Dollar"),
    currency("NOK", "Norwegian Krone"),
    currency("NZD", "New Zealand Dollar"),
    currency("OMR", "Omani Rial"),
    currency("PLN", "Polish Złoty"),
    currency("QAR", "Qatari Riyal"),
    currency("RON", "Romanian Leu"),
    currency("RUB", "Russian Rouble"),
    currency("SAR", "Saudi Arabian Riyal"),
    currency("SEK", "Swedish Krona"),
    currency("SGD", "Singapore Dollar"),
    currency("THB", "Thai Baht"),
    currency("TRY", "Turkish Lira"),
    currency("TWD", "New Taiwan Dollar"),
    currency("UAH", "Ukrainian Hryvnia"),
    currency("USD", "United States Dollar"),
    currency("XOF", "West African CFA Franc"),
    currency("ZAR", "South African Rand"),
];

/// Canonical form of a submitted code: trimmed and upper-cased.
pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hotel::DEFAULT_CURRENCY;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_include_default() {
        let codes: HashSet<_> = CURRENCIES.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), CURRENCIES.len());
        assert!(find_currency(DEFAULT_CURRENCY).is_some());
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(find_currency("JPY").map(|c| c.name), Some("Japanese Yen"));
        assert!(find_currency("jpy").is_none());
        assert!(find_currency("XXX").is_none());
    }

    #[test]
    fn normalized_codes_match_catalogue() {
        assert_eq!(normalize_currency_code(" eur "), "EUR");
        assert_eq!(normalize_currency_code("   "), "");
        assert!(find_currency(&normalize_currency_code("jpy")).is_some());
    }
}
