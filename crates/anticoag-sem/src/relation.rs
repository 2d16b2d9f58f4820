//! Relation kinds of the model description language.

/// The operator joining the two sides of a model line, decided once at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// `y ~ x`: x is a predictor of y.
    Regression,
    /// `a ~~ b`: (residual) variance or covariance.
    Covariance,
    /// `f =~ x`: x is an indicator of latent f.
    Measurement,
}

impl RelationKind {
    /// All kinds, longest operator first (the order operators must be matched in).
    pub const ALL: [RelationKind; 3] = [Self::Measurement, Self::Covariance, Self::Regression];

    /// Operator as written in a model description.
    pub fn op(&self) -> &'static str {
        match self {
            Self::Regression => "~",
            Self::Covariance => "~~",
            Self::Measurement => "=~",
        }
    }

    /// Parse an operator token.
    pub fn from_op(op: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.op() == op)
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.op())
    }
}
