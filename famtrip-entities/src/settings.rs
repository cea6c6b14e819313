use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Cs,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Czk,
    Usd,
    Gbp,
}

impl Currency {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Czk => "Kč",
            Self::Usd => "$",
            Self::Gbp => "£",
        }
    }

    /// Formats an amount with the currency symbol in its usual position.
    pub fn format_amount(self, amount: f64) -> String {
        match self {
            Self::Czk => format!("{amount:.0} {}", self.symbol()),
            _ => format!("{}{amount:.2}", self.symbol()),
        }
    }
}

/// User preferences persisted on the local device.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub language: Language,
    pub currency: Currency,
}

impl Settings {
    /// Builds settings from stored codes. Unknown or missing
    /// codes fall back to the defaults.
    pub fn from_codes(language: Option<&str>, currency: Option<&str>) -> Self {
        Self {
            language: language.and_then(|l| l.parse().ok()).unwrap_or_default(),
            currency: currency.and_then(|c| c.parse().ok()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fall_back_to_defaults() {
        let s = Settings::from_codes(Some("de"), Some("CHF"));
        assert_eq!(Language::En, s.language);
        assert_eq!(Currency::Eur, s.currency);
        assert_eq!(Settings::default(), Settings::from_codes(None, None));
    }

    #[test]
    fn parse_known_codes() {
        let s = Settings::from_codes(Some("cs"), Some("CZK"));
        assert_eq!(Language::Cs, s.language);
        assert_eq!(Currency::Czk, s.currency);
        assert_eq!("CZK", s.currency.as_ref());
        assert_eq!("cs", s.language.as_ref());
    }

    #[test]
    fn currency_symbols() {
        assert_eq!("€12.50", Currency::Eur.format_amount(12.5));
        assert_eq!("150 Kč", Currency::Czk.format_amount(150.0));
        assert_eq!("£", Currency::Gbp.symbol());
    }
}
