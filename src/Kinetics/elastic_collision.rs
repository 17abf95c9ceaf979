use crate::Kinetics::User_species::{Specie, Species};
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::physical_constants::PhysicalConstants;
use crate::Kinetics::plasma_reaction::Reaction;
use crate::Kinetics::rate_constant::RateConstant;
use crate::Kinetics::reaction_api::ReactionCalculator;
use log::debug;
use nalgebra::DVector;
use std::fmt;
use std::sync::Arc;

/// Elastic collision of electrons with a heavy specie: thermal energy is exchanged,
/// densities do not change. The colliding specie is the only reactive and the only product.
#[derive(Debug, Clone)]
pub struct ElasticCollisionWithElectron {
    pub reaction: Reaction,
    pub constants: PhysicalConstants,
}

impl ElasticCollisionWithElectron {
    /// uses CODATA physical constants, see [`ElasticCollisionWithElectron::with_constants`]
    pub fn new(
        species: Arc<Species>,
        colliding_specie: &str,
        rate_constant: RateConstant,
        energy_threshold: f64,
    ) -> Result<Self, KineticsError> {
        Self::with_constants(
            species,
            colliding_specie,
            rate_constant,
            energy_threshold,
            PhysicalConstants::default(),
        )
    }

    pub fn with_constants(
        species: Arc<Species>,
        colliding_specie: &str,
        rate_constant: RateConstant,
        energy_threshold: f64,
        constants: PhysicalConstants,
    ) -> Result<Self, KineticsError> {
        let reaction = Reaction::assemble(
            species,
            &[colliding_specie],
            &[colliding_specie],
            rate_constant,
            energy_threshold,
            None,
            None,
        )?;
        debug!("elastic collision with electrons of '{}'", colliding_specie);
        Ok(Self {
            reaction,
            constants,
        })
    }

    pub fn colliding_specie(&self) -> &Specie {
        &self.reaction.reactives[0]
    }

    pub fn colliding_index(&self) -> usize {
        self.reaction.reactives_indices[0]
    }
}

impl ReactionCalculator for ElasticCollisionWithElectron {
    fn density_change_rate(&self, _state: &DVector<f64>) -> DVector<f64> {
        DVector::zeros(self.reaction.nb())
    }
    /// 3 (m_e/M) k_B (T_e - T_heavy) n_e n_heavy K
    /// positive when electrons are hotter than the heavy specie
    fn electron_loss_power(&self, state: &DVector<f64>) -> f64 {
        let k = self.reaction.rate_constant.eval(state.as_slice());
        let specie = self.colliding_specie();
        let species = &self.reaction.species;
        let mass_ratio = self.constants.m_e / specie.mass;
        let delta_temp =
            state[species.electron_temperature_slot()] - state[species.temperature_slot(specie)];
        3.0 * mass_ratio
            * self.constants.k_b
            * delta_temp
            * state[0]
            * state[self.colliding_index()]
            * k
    }

    fn base(&self) -> &Reaction {
        &self.reaction
    }
}

impl fmt::Display for ElasticCollisionWithElectron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reaction, f)
    }
}
