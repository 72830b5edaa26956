use crate::types::err::ConfigError;

/// A configuration option, bounded by some minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// A name for the option, e.g. to use when logging.
    pub name: &'static str,

    /// The minimum value of the option.
    pub min: T,

    /// The maximum value of the option.
    pub max: T,

    /// The value of the option.
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    ///
    /// ```rust
    /// # use otter_twosat::config::Config;
    /// let mut config = Config::default();
    /// assert!(config.rng_seed.set(73).is_ok());
    /// assert_eq!(config.rng_seed.value, 73);
    /// ```
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if value < self.min || self.max < value {
            return Err(ConfigError::OutOfBounds { name: self.name });
        }
        self.value = value;
        Ok(())
    }
}
