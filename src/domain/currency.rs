//! Display currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency the market snapshot is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
}

impl Currency {
    /// Code sent as `vs_currency` to the markets endpoint.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "eur",
            Self::Usd => "usd",
        }
    }

    /// Upper-case label used in headers and cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }

    /// Currency sign placed before formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
        }
    }

    /// The other currency; used by the toggle key.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Eur => Self::Usd,
            Self::Usd => Self::Eur,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Currency {
    type Err = crate::domain::CoinpaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eur" => Ok(Self::Eur),
            "usd" => Ok(Self::Usd),
            other => Err(crate::domain::CoinpaneError::Config(format!(
                "unsupported currency '{other}', expected 'eur' or 'usd'"
            ))),
        }
    }
}
