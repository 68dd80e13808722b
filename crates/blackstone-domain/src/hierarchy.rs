//! Hierarchy module - binding authority levels for legal instruments

/// Level on the binding-authority hierarchy
///
/// The order is total and fixed. Lower ordinal = higher binding authority:
/// a constitution outranks a cardinal law, which outranks an ordinary law,
/// and so on down to local regulations. Conflict checks compare a candidate
/// document only against documents at an equal or more authoritative level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HierarchyLevel {
    /// Constitutional provisions (highest authority)
    Constitution,

    /// Cardinal laws (qualified-majority statutes)
    CardinalLaw,

    /// Ordinary statutes
    OrdinaryLaw,

    /// Decrees of the government
    GovernmentDecree,

    /// Decrees of individual ministers
    MinisterialDecree,

    /// Local government regulations (lowest authority)
    LocalRegulation,
}

impl HierarchyLevel {
    /// Numeric position on the hierarchy (0 = highest authority)
    pub fn ordinal(&self) -> u8 {
        match self {
            HierarchyLevel::Constitution => 0,
            HierarchyLevel::CardinalLaw => 1,
            HierarchyLevel::OrdinaryLaw => 2,
            HierarchyLevel::GovernmentDecree => 3,
            HierarchyLevel::MinisterialDecree => 4,
            HierarchyLevel::LocalRegulation => 5,
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyLevel::Constitution => "constitution",
            HierarchyLevel::CardinalLaw => "cardinal_law",
            HierarchyLevel::OrdinaryLaw => "ordinary_law",
            HierarchyLevel::GovernmentDecree => "government_decree",
            HierarchyLevel::MinisterialDecree => "ministerial_decree",
            HierarchyLevel::LocalRegulation => "local_regulation",
        }
    }

    /// Parse a level from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "constitution" => Some(HierarchyLevel::Constitution),
            "cardinal_law" => Some(HierarchyLevel::CardinalLaw),
            "ordinary_law" => Some(HierarchyLevel::OrdinaryLaw),
            "government_decree" => Some(HierarchyLevel::GovernmentDecree),
            "ministerial_decree" => Some(HierarchyLevel::MinisterialDecree),
            "local_regulation" => Some(HierarchyLevel::LocalRegulation),
            _ => None,
        }
    }

    /// Whether this level carries authority equal to or greater than `other`
    ///
    /// # Examples
    ///
    /// ```
    /// use blackstone_domain::HierarchyLevel;
    ///
    /// assert!(HierarchyLevel::Constitution.outranks_or_equals(HierarchyLevel::OrdinaryLaw));
    /// assert!(!HierarchyLevel::LocalRegulation.outranks_or_equals(HierarchyLevel::OrdinaryLaw));
    /// ```
    pub fn outranks_or_equals(&self, other: HierarchyLevel) -> bool {
        self.ordinal() <= other.ordinal()
    }

    /// All levels in authority order, highest first
    pub fn all() -> [HierarchyLevel; 6] {
        [
            HierarchyLevel::Constitution,
            HierarchyLevel::CardinalLaw,
            HierarchyLevel::OrdinaryLaw,
            HierarchyLevel::GovernmentDecree,
            HierarchyLevel::MinisterialDecree,
            HierarchyLevel::LocalRegulation,
        ]
    }
}

impl std::str::FromStr for HierarchyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid hierarchy level: {}", s))
    }
}
