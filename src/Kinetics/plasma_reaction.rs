//! # Reaction channel
//!
//! A [`Reaction`] maps a subset of the species registry (reactives, products, stoichiometric
//! coefficients), a rate constant and an energy threshold to two pure functions of the state
//! vector `[n_e, n_1, ..., n_(N-1), T_e, T_1, ...]`:
//! - `density_change_rate(state)`: contribution of the reaction to d(n)/dt of every specie
//! - `electron_loss_power(state)`: power exchanged because of the reaction
//!
//! ## Rate constant call conventions
//! The two operations do not feed the rate constant the same slice:
//! `density_change_rate` passes only the temperatures (`state[N..]`) while
//! `electron_loss_power` passes the whole state vector. Rate constant functions shared
//! between both operations must handle both layouts.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use nalgebra::DVector;
//! use plasma_kinetics::Kinetics::User_species::{Specie, Species};
//! use plasma_kinetics::Kinetics::plasma_reaction::Reaction;
//! use plasma_kinetics::Kinetics::rate_constant::RateConstant;
//! use plasma_kinetics::Kinetics::reaction_api::ReactionCalculator;
//!
//! let species = Arc::new(
//!     Species::new(vec![Specie::new("e", 9.11e-31, 0), Specie::new("Ar", 6.63e-26, 1), Specie::new("Ar+", 6.63e-26, 1)]).unwrap(),
//! );
//! let k_ion = RateConstant::constant("K_ion_Ar", 2.0);
//! let reaction = Reaction::new(species, &["e", "Ar"], &["Ar+"], k_ion, 15.76, None, None).unwrap();
//! let state = DVector::from_vec(vec![3.0, 5.0, 0.0, 3e4, 300.0]);
//! let rate = reaction.density_change_rate(&state);
//! assert_eq!(rate.as_slice(), &[-30.0, -30.0, 30.0]);
//! println!("{}", reaction);
//! ```
use crate::Kinetics::User_species::{Specie, Species};
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::rate_constant::RateConstant;
use crate::Kinetics::reaction_api::ReactionCalculator;
use log::{debug, warn};
use nalgebra::DVector;
use std::fmt;
use std::sync::Arc;

/// One reaction channel. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Reaction {
    /// registry the indices refer to
    pub species: Arc<Species>,
    pub reactives: Vec<Specie>,
    pub reactives_indices: Vec<usize>,
    pub products: Vec<Specie>,
    pub products_indices: Vec<usize>,
    /// one coefficient per specie of the registry, always positive or zero
    pub stoechio_coeffs: DVector<f64>,
    pub rate_constant: RateConstant,
    pub energy_threshold: f64,
    /// species present but left out of the density bookkeeping (e.g. electrons acting as catalysts)
    pub spectators: Option<Vec<String>>,
}

impl Reaction {
    /// Electrons should be listed among reactives and products only if they are not spectators,
    /// otherwise their density change would be counted.
    /// If `stoechio_coeffs` is None every reactive and every product gets coefficient 1.
    pub fn new(
        species: Arc<Species>,
        reactives: &[&str],
        products: &[&str],
        rate_constant: RateConstant,
        energy_threshold: f64,
        stoechio_coeffs: Option<Vec<f64>>,
        spectators: Option<Vec<String>>,
    ) -> Result<Self, KineticsError> {
        let reaction = Self::assemble(
            species,
            reactives,
            products,
            rate_constant,
            energy_threshold,
            stoechio_coeffs,
            spectators,
        )?;
        for (specie, i) in reaction.reactives.iter().zip(reaction.reactives_indices.iter()) {
            if reaction.products_indices.contains(i) {
                warn!(
                    "specie '{}' is both reactive and product in '{}': its product rate overrides its reactive rate",
                    specie.name, reaction
                );
            }
        }
        Ok(reaction)
    }
    /// construction and validation without the overlap warning; elastic collisions overlap on purpose
    pub(crate) fn assemble(
        species: Arc<Species>,
        reactives: &[&str],
        products: &[&str],
        rate_constant: RateConstant,
        energy_threshold: f64,
        stoechio_coeffs: Option<Vec<f64>>,
        spectators: Option<Vec<String>>,
    ) -> Result<Self, KineticsError> {
        let (reactives, reactives_indices) = resolve_species(&species, reactives, "reactive")?;
        let (products, products_indices) = resolve_species(&species, products, "product")?;
        let nb = species.nb();

        let stoechio_coeffs = match stoechio_coeffs {
            Some(coeffs) => {
                if coeffs.len() != nb {
                    return Err(KineticsError::CoefficientsLength {
                        expected: nb,
                        got: coeffs.len(),
                    });
                }
                // NaN fails the comparison and is rejected too
                if let Some((i, &value)) = coeffs.iter().enumerate().find(|(_, c)| !(**c >= 0.0)) {
                    return Err(KineticsError::NegativeCoefficient {
                        name: species.get(i).map(|s| s.name.clone()).unwrap_or_default(),
                        value,
                    });
                }
                DVector::from_vec(coeffs)
            }
            None => {
                let mut coeffs = DVector::<f64>::zeros(nb);
                for &i in reactives_indices.iter() {
                    coeffs[i] = 1.0;
                }
                for &j in products_indices.iter() {
                    coeffs[j] = 1.0;
                }
                coeffs
            }
        };

        if let Some(spectators) = &spectators {
            for name in spectators {
                species.get_specie_by_name(name)?;
            }
        }

        let reaction = Self {
            species,
            reactives,
            reactives_indices,
            products,
            products_indices,
            stoechio_coeffs,
            rate_constant,
            energy_threshold,
            spectators,
        };
        debug!("reaction constructed: {}", reaction);
        Ok(reaction)
    }
    /// number of species in the registry
    pub fn nb(&self) -> usize {
        self.species.nb()
    }
    /// product of the densities of all reactives (one factor per listed reactive)
    pub fn reactives_densities_product(&self, state: &DVector<f64>) -> f64 {
        self.reactives_indices.iter().map(|&i| state[i]).product()
    }

    fn format_species(&self, species: &[Specie], indices: &[usize]) -> String {
        species
            .iter()
            .zip(indices.iter())
            .map(|(sp, &idx)| {
                let coeff_str = format_coeff(self.stoechio_coeffs[idx]);
                format!("{} {}", coeff_str, sp.name).trim().to_string()
            })
            .collect::<Vec<String>>()
            .join(" + ")
    }
}

impl ReactionCalculator for Reaction {
    fn density_change_rate(&self, state: &DVector<f64>) -> DVector<f64> {
        let nb = self.nb();
        let k = self.rate_constant.eval(&state.as_slice()[nb..]);
        let product = k * self.reactives_densities_product(state);
        let mut rate = DVector::<f64>::zeros(nb);
        for &i in self.reactives_indices.iter() {
            rate[i] = -product * self.stoechio_coeffs[i];
        }
        // a specie listed on both sides keeps the product value
        for &j in self.products_indices.iter() {
            rate[j] = product * self.stoechio_coeffs[j];
        }
        rate
    }

    fn electron_loss_power(&self, state: &DVector<f64>) -> f64 {
        let k = self.rate_constant.eval(state.as_slice());
        self.energy_threshold * k * self.reactives_densities_product(state)
    }

    fn base(&self) -> &Reaction {
        self
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}          K_r = {}",
            self.format_species(&self.reactives, &self.reactives_indices),
            self.format_species(&self.products, &self.products_indices),
            self.rate_constant.name()
        )
    }
}

/// names -> (species, registry indices); fails on the first unknown name
fn resolve_species(
    species: &Species,
    names: &[&str],
    role: &'static str,
) -> Result<(Vec<Specie>, Vec<usize>), KineticsError> {
    if names.is_empty() {
        return Err(KineticsError::EmptySpeciesList(role));
    }
    let mut resolved = Vec::with_capacity(names.len());
    let mut indices = Vec::with_capacity(names.len());
    for name in names {
        let specie = species.get_specie_by_name(name)?;
        let index = species.get_index_by_instance(specie)?;
        if index >= species.nb() {
            return Err(KineticsError::IndexOutOfRange {
                role,
                index,
                nb: species.nb(),
            });
        }
        resolved.push(specie.clone());
        indices.push(index);
    }
    Ok((resolved, indices))
}

/// 1 -> "", whole numbers -> integer, anything else -> two decimals
pub fn format_coeff(coeff: f64) -> String {
    if coeff.fract() == 0.0 {
        if coeff == 1.0 {
            String::new()
        } else {
            format!("{:.0}", coeff)
        }
    } else {
        format!("{:.2}", coeff)
    }
}
