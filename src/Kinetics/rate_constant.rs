use crate::Kinetics::kinetics_error::KineticsError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// signature of a rate constant function. The slice is either the temperature part of the
/// state vector or the whole state vector, depending on the operation that calls it
pub type RateFn = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// Opaque, named rate constant. Cloning shares the underlying function.
/// The name is used only for display of reaction equations.
#[derive(Clone)]
pub struct RateConstant {
    name: String,
    fun: Arc<RateFn>,
}

impl RateConstant {
    pub fn new<F>(name: &str, fun: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            fun: Arc::new(fun),
        }
    }

    pub fn constant(name: &str, value: f64) -> Self {
        Self::new(name, move |_| value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    /// output is not validated: negative or NaN values go straight to the caller
    pub fn eval(&self, args: &[f64]) -> f64 {
        (self.fun)(args)
    }
}

impl fmt::Debug for RateConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateConstant")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Rate constants available to mechanism files, keyed by name
#[derive(Debug, Clone, Default)]
pub struct RateConstantLibrary {
    rate_constants: HashMap<String, RateConstant>,
}

impl RateConstantLibrary {
    pub fn new() -> Self {
        Self::default()
    }
    /// registers a rate constant under its own name, replacing a previous one with the same name
    pub fn insert(&mut self, rate_constant: RateConstant) {
        self.rate_constants
            .insert(rate_constant.name().to_string(), rate_constant);
    }

    pub fn get(&self, name: &str) -> Result<RateConstant, KineticsError> {
        self.rate_constants
            .get(name)
            .cloned()
            .ok_or_else(|| KineticsError::UnknownRateConstant(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rate_constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rate_constants.is_empty()
    }
}

impl FromIterator<RateConstant> for RateConstantLibrary {
    fn from_iter<I: IntoIterator<Item = RateConstant>>(iter: I) -> Self {
        let mut library = Self::new();
        for rate_constant in iter {
            library.insert(rate_constant);
        }
        library
    }
}
