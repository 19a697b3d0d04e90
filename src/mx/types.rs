#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Outcome of an MX lookup, records sorted by ascending preference.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MxCheck {
    pub has_mx_record: bool,
    pub records: Vec<MxRecord>,
}

impl MxCheck {
    pub(crate) fn from_records(records: Vec<MxRecord>) -> Self {
        Self {
            has_mx_record: !records.is_empty(),
            records,
        }
    }

    /// Exchange host names in preference order.
    pub fn hosts(&self) -> Vec<String> {
        self.records.iter().map(|mx| mx.exchange.clone()).collect()
    }
}
