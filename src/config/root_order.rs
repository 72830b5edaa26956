use std::str::FromStr;

/// The order in which nodes are used as the root of a depth-first search.
///
/// The order influences which components are found first, and the order of nodes within a component.
/// Though, the components themselves are independent of the order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RootOrder {
    /// Ascending node order.
    Natural = 0,

    /// A shuffle of the nodes, seeded by the [rng_seed](crate::config::Config::rng_seed) of a config.
    Shuffled,
}

impl std::fmt::Display for RootOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural => write!(f, "Natural"),
            Self::Shuffled => write!(f, "Shuffled"),
        }
    }
}

impl RootOrder {
    /// The minimum RootOrder type.
    pub const MIN: RootOrder = RootOrder::Natural;

    /// The maximum RootOrder type.
    pub const MAX: RootOrder = RootOrder::Shuffled;
}

impl FromStr for RootOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Natural" => Ok(Self::Natural),

            "Shuffled" => Ok(Self::Shuffled),

            _unkown_string => Err(()),
        }
    }
}
