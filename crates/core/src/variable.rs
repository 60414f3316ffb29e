#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The domain of a decision variable.
///
/// The set is closed: every predicate and the relaxation table are exhaustive
/// matches over the tag, so adding a member forces every use site to decide
/// how the new type behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VariableType {
    /// Integer in `{0, 1}`.
    Binary,
    /// Integer in `{0, 1, 2}`.
    Ternary,
    /// Integer in `{-1, 0, 1}`.
    BalancedTernary,
    /// Non-negative integer.
    UnsignedInteger,
    /// Any integer.
    SignedInteger,
    /// Continuous in `[0, 1]`.
    Percentage,
    /// Non-negative continuous.
    UnsignedContinuous,
    /// Any real value.
    Continuous,
}

impl VariableType {
    /// Returns `true` for [`VariableType::Binary`].
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Binary)
    }

    /// Returns `true` if the variable may only take integer values.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        match self {
            Self::Binary
            | Self::Ternary
            | Self::BalancedTernary
            | Self::UnsignedInteger
            | Self::SignedInteger => true,
            Self::Percentage | Self::UnsignedContinuous | Self::Continuous => false,
        }
    }

    /// Returns `true` if the domain excludes negative values.
    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        match self {
            Self::Binary
            | Self::Ternary
            | Self::UnsignedInteger
            | Self::Percentage
            | Self::UnsignedContinuous => true,
            Self::BalancedTernary | Self::SignedInteger | Self::Continuous => false,
        }
    }

    /// Returns `true` if the variable may take any real value in its domain.
    #[must_use]
    pub const fn is_continuous(self) -> bool {
        !self.is_integral()
    }

    /// Returns `true` for integral types other than [`VariableType::Binary`].
    ///
    /// These are the variables listed in the `Generals` section of an LP file.
    #[must_use]
    pub const fn is_not_binary_integral(self) -> bool {
        !self.is_binary() && self.is_integral()
    }

    /// Returns the continuous type this type loosens to under linear relaxation.
    ///
    /// | From | To |
    /// |---|---|
    /// | `Binary` | `Percentage` |
    /// | `Ternary`, `UnsignedInteger` | `UnsignedContinuous` |
    /// | `BalancedTernary`, `SignedInteger` | `Continuous` |
    /// | continuous types | unchanged |
    #[must_use]
    pub const fn relaxed(self) -> Self {
        match self {
            Self::Binary => Self::Percentage,
            Self::Ternary | Self::UnsignedInteger => Self::UnsignedContinuous,
            Self::BalancedTernary | Self::SignedInteger => Self::Continuous,
            Self::Percentage | Self::UnsignedContinuous | Self::Continuous => self,
        }
    }

    /// Returns the natural `[lower, upper]` domain of the type.
    ///
    /// Unbounded directions use `f64::NEG_INFINITY` / `f64::INFINITY`.
    #[must_use]
    pub const fn default_bounds(self) -> (f64, f64) {
        match self {
            Self::Binary | Self::Percentage => (0.0, 1.0),
            Self::Ternary => (0.0, 2.0),
            Self::BalancedTernary => (-1.0, 1.0),
            Self::UnsignedInteger | Self::UnsignedContinuous => (0.0, f64::INFINITY),
            Self::SignedInteger | Self::Continuous => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }
}

/// The sign pattern of a variable's bounds, as seen by LP duality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundShape {
    /// `(-inf, +inf)`.
    Free,
    /// `[0, +inf)`.
    NonNegative,
    /// `(-inf, 0]`.
    NonPositive,
    /// Any finite, nonzero or degenerate bound.
    Other,
}

/// One column of an intermediate model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// Dense column index; equals the variable's position in the model.
    pub index: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub kind: VariableType,
    pub name: String,
    /// The current value held by the symbolic layer, if any.
    pub value: Option<f64>,
}

impl Variable {
    /// Creates a variable without a current value.
    #[must_use]
    pub fn new(
        index: usize,
        lower_bound: f64,
        upper_bound: f64,
        kind: VariableType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            index,
            lower_bound,
            upper_bound,
            kind,
            name: name.into(),
            value: None,
        }
    }

    /// Returns a variable with the given current value, keeping other fields unchanged.
    #[must_use]
    pub fn with_value(self, value: f64) -> Self {
        Self {
            value: Some(value),
            ..self
        }
    }

    /// Returns `true` if both bounds are the unconstrained sentinels.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.lower_bound == f64::NEG_INFINITY && self.upper_bound == f64::INFINITY
    }

    /// Returns `true` if the range is a single point.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    /// Classifies the bounds for duality.
    #[must_use]
    pub fn bound_shape(&self) -> BoundShape {
        let lower_free = self.lower_bound == f64::NEG_INFINITY;
        let upper_free = self.upper_bound == f64::INFINITY;

        match (lower_free, upper_free) {
            (true, true) => BoundShape::Free,
            (false, true) if self.lower_bound == 0.0 => BoundShape::NonNegative,
            (true, false) if self.upper_bound == 0.0 => BoundShape::NonPositive,
            _ => BoundShape::Other,
        }
    }
}
