use serde::Serialize;

/// Entry of the static currency picker
///
/// The table ships with the component and is never fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

const fn currency(
    code: &'static str,
    symbol: &'static str,
    name: &'static str,
    flag: &'static str,
) -> CurrencyOption {
    CurrencyOption {
        code,
        symbol,
        name,
        flag,
    }
}

static CURRENCIES: [CurrencyOption; 20] = [
    currency("USD", "$", "US Dollar", "🇺🇸"),
    currency("EUR", "€", "Euro", "🇪🇺"),
    currency("GBP", "£", "British Pound", "🇬🇧"),
    currency("JPY", "¥", "Japanese Yen", "🇯🇵"),
    currency("AUD", "A$", "Australian Dollar", "🇦🇺"),
    currency("CAD", "C$", "Canadian Dollar", "🇨🇦"),
    currency("CHF", "₣", "Swiss Franc", "🇨🇭"),
    currency("CNY", "¥", "Chinese Yuan", "🇨🇳"),
    currency("SEK", "kr", "Swedish Krona", "🇸🇪"),
    currency("NZD", "NZ$", "New Zealand Dollar", "🇳🇿"),
    currency("MXN", "$", "Mexican Peso", "🇲🇽"),
    currency("SGD", "S$", "Singapore Dollar", "🇸🇬"),
    currency("HKD", "HK$", "Hong Kong Dollar", "🇭🇰"),
    currency("NOK", "kr", "Norwegian Krone", "🇳🇴"),
    currency("KRW", "₩", "South Korean Won", "🇰🇷"),
    currency("TRY", "₺", "Turkish Lira", "🇹🇷"),
    currency("RUB", "₽", "Russian Ruble", "🇷🇺"),
    currency("INR", "₹", "Indian Rupee", "🇮🇳"),
    currency("BRL", "R$", "Brazilian Real", "🇧🇷"),
    currency("ZAR", "R", "South African Rand", "🇿🇦"),
];

impl CurrencyOption {
    /// All currencies in picker order
    pub fn all() -> &'static [CurrencyOption] {
        &CURRENCIES
    }

    pub fn find(code: &str) -> Option<&'static CurrencyOption> {
        CURRENCIES.iter().find(|c| c.code == code)
    }

    /// Display symbol for a stored code; unknown codes pass through verbatim
    pub fn symbol_for(code: &str) -> &str {
        match Self::find(code) {
            Some(c) => c.symbol,
            None => code,
        }
    }

    /// Label shown in the picker, e.g. "🇬🇧 GBP - British Pound (£)"
    pub fn label(&self) -> String {
        format!("{} {} - {} ({})", self.flag, self.code, self.name, self.symbol)
    }
}
