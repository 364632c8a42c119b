use serde::{Deserialize, Serialize};

/// Relationship categories a query can ask for
///
/// `None` is the null kind: unknown keywords map to it and it never yields
/// anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    PaternalUncle,
    MaternalUncle,
    PaternalAunt,
    MaternalAunt,
    SisterInLaw,
    BrotherInLaw,
    Son,
    Daughter,
    Siblings,
    None,
}

impl RelationshipKind {
    /// Every kind, in declaration order
    pub const ALL: [RelationshipKind; 10] = [
        RelationshipKind::PaternalUncle,
        RelationshipKind::MaternalUncle,
        RelationshipKind::PaternalAunt,
        RelationshipKind::MaternalAunt,
        RelationshipKind::SisterInLaw,
        RelationshipKind::BrotherInLaw,
        RelationshipKind::Son,
        RelationshipKind::Daughter,
        RelationshipKind::Siblings,
        RelationshipKind::None,
    ];

    /// Parse a relationship keyword, case-insensitively
    ///
    /// Unrecognised keywords map to `RelationshipKind::None`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "paternal-uncle" => RelationshipKind::PaternalUncle,
            "maternal-uncle" => RelationshipKind::MaternalUncle,
            "paternal-aunt" => RelationshipKind::PaternalAunt,
            "maternal-aunt" => RelationshipKind::MaternalAunt,
            "sister-in-law" => RelationshipKind::SisterInLaw,
            "brother-in-law" => RelationshipKind::BrotherInLaw,
            "son" => RelationshipKind::Son,
            "daughter" => RelationshipKind::Daughter,
            "siblings" => RelationshipKind::Siblings,
            _ => RelationshipKind::None,
        }
    }

    /// Canonical keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::PaternalUncle => "paternal-uncle",
            RelationshipKind::MaternalUncle => "maternal-uncle",
            RelationshipKind::PaternalAunt => "paternal-aunt",
            RelationshipKind::MaternalAunt => "maternal-aunt",
            RelationshipKind::SisterInLaw => "sister-in-law",
            RelationshipKind::BrotherInLaw => "brother-in-law",
            RelationshipKind::Son => "son",
            RelationshipKind::Daughter => "daughter",
            RelationshipKind::Siblings => "siblings",
            RelationshipKind::None => "none",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
