// Tab identifiers
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Billing,
    Logistics,
    Compliance,
}

/// Raised when a tab identifier is not one of the known tabs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab `{0}` (expected one of: tab-cobranca, tab-logistica, tab-compliance)")]
pub struct UnknownTabError(pub String);

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Billing, TabId::Logistics, TabId::Compliance];

    /// Identifier used in URLs and markup
    pub fn value(self) -> &'static str {
        match self {
            TabId::Billing => "tab-cobranca",
            TabId::Logistics => "tab-logistica",
            TabId::Compliance => "tab-compliance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TabId::Billing => "Financeiro (Cobrança)",
            TabId::Logistics => "Logística",
            TabId::Compliance => "Compliance",
        }
    }
}

impl FromStr for TabId {
    type Err = UnknownTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab-cobranca" => Ok(TabId::Billing),
            "tab-logistica" => Ok(TabId::Logistics),
            "tab-compliance" => Ok(TabId::Compliance),
            other => Err(UnknownTabError(other.to_string())),
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
