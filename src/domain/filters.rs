use serde::{Deserialize, Serialize};

/// Select value meaning "do not filter on this field".
pub const ALL: &str = "ALL";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FilterName {
    State,
    Merchant,
}

impl FilterName {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterName::State => "state",
            FilterName::Merchant => "merchant",
        }
    }

    pub fn input_id(self) -> String {
        format!("virtual-cards-filter-{}", self.as_str())
    }
}

/// Filters of the virtual card list of a host.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct VirtualCardFilters {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub merchant: Option<String>,
}

impl VirtualCardFilters {
    pub fn get(&self, name: FilterName) -> Option<&str> {
        match name {
            FilterName::State => self.state.as_deref(),
            FilterName::Merchant => self.merchant.as_deref(),
        }
    }

    /// Returns a copy with one filter replaced; picking `ALL` clears it.
    pub fn with_filter(&self, name: FilterName, value: &str) -> Self {
        let value = (value != ALL).then(|| value.to_string());
        let mut next = self.clone();
        match name {
            FilterName::State => next.state = value,
            FilterName::Merchant => next.merchant = value,
        }
        next
    }
}
