//! Transformation kind enum and its fixed priority order.

/// The recognized transformation kinds.
///
/// Only these eight participate in extraction; nodes whose `TYPE`
/// attribute names anything else are silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationKind {
    Expression,
    LookupProcedure,
    SourceQualifier,
    Router,
    Joiner,
    UpdateStrategy,
    Sql,
    Target,
}

impl TransformationKind {
    /// All recognized kinds, in extraction priority order.
    /// The engine processes one full document pass per kind in this order.
    pub fn all() -> &'static [TransformationKind] {
        &[
            Self::Expression,
            Self::LookupProcedure,
            Self::SourceQualifier,
            Self::Router,
            Self::Joiner,
            Self::UpdateStrategy,
            Self::Sql,
            Self::Target,
        ]
    }

    /// The kind name as it appears in the `TYPE` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Expression => "Expression",
            Self::LookupProcedure => "Lookup Procedure",
            Self::SourceQualifier => "Source Qualifier",
            Self::Router => "Router",
            Self::Joiner => "Joiner",
            Self::UpdateStrategy => "Update Strategy",
            Self::Sql => "SQL",
            Self::Target => "Target",
        }
    }

    /// Parse a kind from its `TYPE` attribute spelling.
    pub fn parse(name: &str) -> Option<TransformationKind> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
