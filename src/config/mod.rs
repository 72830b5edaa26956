/*!
Configuration of a solve.

All configuration for a [context](crate::context) is contained within a [Config], and the same config is passed to each [procedure](crate::procedures) which has some choice over how to proceed.

Each option is a [ConfigOption], and so carries a name and bounds alongside the value.

```rust
# use otter_twosat::config::{Config, RootOrder, SCCTraversal};
let mut config = Config::default();
assert_eq!(config.scc_traversal.value, SCCTraversal::Iterative);

config.root_order.value = RootOrder::Shuffled;
config.rng_seed.value = 3;
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod root_order;
pub use root_order::RootOrder;

mod scc_traversal;
pub use scc_traversal::SCCTraversal;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which traversal to use when finding strongly connected components.
    pub scc_traversal: ConfigOption<SCCTraversal>,

    /// The order in which nodes are used as the root of a traversal.
    pub root_order: ConfigOption<RootOrder>,

    /// The seed used for any source of randomness, e.g. a [shuffled](RootOrder::Shuffled) root order.
    pub rng_seed: ConfigOption<u64>,
}

impl Default for Config {
    /// The default config is configured to provide quick, deterministic, results without risk of overflowing the stack.
    fn default() -> Self {
        Config {
            scc_traversal: ConfigOption {
                name: "scc_traversal",
                min: SCCTraversal::MIN,
                max: SCCTraversal::MAX,
                value: SCCTraversal::Iterative,
            },

            root_order: ConfigOption {
                name: "root_order",
                min: RootOrder::MIN,
                max: RootOrder::MAX,
                value: RootOrder::Natural,
            },

            rng_seed: ConfigOption {
                name: "rng_seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}
