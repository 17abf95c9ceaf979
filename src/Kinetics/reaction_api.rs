use crate::Kinetics::User_species::Species;
use crate::Kinetics::elastic_collision::ElasticCollisionWithElectron;
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::physical_constants::PhysicalConstants;
use crate::Kinetics::plasma_reaction::Reaction;
use crate::Kinetics::rate_constant::RateConstantLibrary;
use enum_dispatch::enum_dispatch;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Evaluation of one reaction channel against a state vector
/// `[n_e, n_1, ..., n_(N-1), T_e, T_1, ...]`. Both operations are pure: the state is only read
/// and a fresh result is returned.
#[enum_dispatch]
pub trait ReactionCalculator {
    /// contribution of the reaction to d(n)/dt, one entry per specie of the registry
    fn density_change_rate(&self, state: &DVector<f64>) -> DVector<f64>;
    /// power exchanged because of the reaction
    fn electron_loss_power(&self, state: &DVector<f64>) -> f64;
    /// the underlying reaction data (species, indices, coefficients, rate constant)
    fn base(&self) -> &Reaction;
}

#[derive(Debug, Clone)]
#[enum_dispatch(ReactionCalculator)]
pub enum ReactionEnum {
    Reaction(Reaction),
    ElasticCollisionWithElectron(ElasticCollisionWithElectron),
}

impl fmt::Display for ReactionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionEnum::Reaction(r) => fmt::Display::fmt(r, f),
            ReactionEnum::ElasticCollisionWithElectron(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl ReactionEnum {
    pub fn kind(&self) -> &'static str {
        match self {
            ReactionEnum::Reaction(_) => "reaction",
            ReactionEnum::ElasticCollisionWithElectron(_) => "elastic_collision",
        }
    }
}

/// Description of one reaction as written in the REACTIONS section of a mechanism file.
/// Rate constants are referenced by name and resolved through a [`RateConstantLibrary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionRecord {
    Reaction {
        reactives: Vec<String>,
        products: Vec<String>,
        rate_constant: String,
        energy_threshold: f64,
        #[serde(default)]
        stoechio_coeffs: Option<Vec<f64>>,
        #[serde(default)]
        spectators: Option<Vec<String>>,
    },
    ElasticCollision {
        colliding_specie: String,
        rate_constant: String,
        energy_threshold: f64,
    },
}

impl ReactionRecord {
    pub fn build(
        &self,
        species: Arc<Species>,
        library: &RateConstantLibrary,
        constants: PhysicalConstants,
    ) -> Result<ReactionEnum, KineticsError> {
        match self {
            ReactionRecord::Reaction {
                reactives,
                products,
                rate_constant,
                energy_threshold,
                stoechio_coeffs,
                spectators,
            } => {
                let reactives: Vec<&str> = reactives.iter().map(String::as_str).collect();
                let products: Vec<&str> = products.iter().map(String::as_str).collect();
                let reaction = Reaction::new(
                    species,
                    &reactives,
                    &products,
                    library.get(rate_constant)?,
                    *energy_threshold,
                    stoechio_coeffs.clone(),
                    spectators.clone(),
                )?;
                Ok(reaction.into())
            }
            ReactionRecord::ElasticCollision {
                colliding_specie,
                rate_constant,
                energy_threshold,
            } => {
                let reaction = ElasticCollisionWithElectron::with_constants(
                    species,
                    colliding_specie,
                    library.get(rate_constant)?,
                    *energy_threshold,
                    constants,
                )?;
                Ok(reaction.into())
            }
        }
    }
}
