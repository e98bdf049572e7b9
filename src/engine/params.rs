//! User-controlled view parameters.

use crate::domain::Currency;

/// Column the table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Price,
    MarketCap,
    Change24h,
}

impl SortKey {
    /// Direction a key starts in when it is newly selected.
    ///
    /// Names read naturally A to Z; the numeric columns put the largest first.
    #[must_use]
    pub const fn default_direction(self) -> SortDirection {
        match self {
            Self::Name => SortDirection::Ascending,
            Self::Price | Self::MarketCap | Self::Change24h => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Search, sort, and currency selection for one session.
///
/// Nothing here is persisted; a new session starts from [`Default`], with the
/// currency optionally overridden by plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParameters {
    pub search_text: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub currency: Currency,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::MarketCap,
            sort_direction: SortDirection::Descending,
            currency: Currency::default(),
        }
    }
}

impl ViewParameters {
    #[must_use]
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    /// Applies a column selection.
    ///
    /// Selecting the active key flips the direction; any other key becomes
    /// active in its default direction.
    pub fn select_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = key.default_direction();
        }
    }
}
