use crate::Kinetics::kinetics_error::KineticsError;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
/*
Core Types:
        Specie struct: one entry of the registry (name, mass in kg, number of atoms)
        Species struct: ordered registry of all species of the model
Main Functionality:
        new(): validates and indexes a vector of species
        get_specie_by_name(), get_index_by_name(), get_index_by_instance(): lookups
        nb(): number of species
State vector layout:
        [n_e, n_1, ..., n_(N-1), T_e, T_(group 1), ..., T_(group M-1)]
        the first N entries are densities in registry order, the electron temperature sits at N,
        the temperature of a heavy specie sits at N + nb_atoms, so species with the same number
        of atoms share one temperature slot
*/

/// One chemical/physical entity: atom, molecule, ion or electron
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specie {
    pub name: String,
    /// mass, kg
    pub mass: f64,
    /// 0 for electrons and atomic markers; selects the temperature slot of the specie
    #[serde(default)]
    pub nb_atoms: usize,
}

impl Specie {
    pub fn new(name: &str, mass: f64, nb_atoms: usize) -> Self {
        Self {
            name: name.to_string(),
            mass,
            nb_atoms,
        }
    }
}

/// Ordered, name-keyed registry of species. The order never changes after construction:
/// the index of a specie is its offset in the state vector.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Specie>")]
pub struct Species {
    species: Vec<Specie>,
    map_of_indices: HashMap<String, usize>,
}

impl TryFrom<Vec<Specie>> for Species {
    type Error = KineticsError;
    fn try_from(species: Vec<Specie>) -> Result<Self, Self::Error> {
        Species::new(species)
    }
}

impl Species {
    pub fn new(species: Vec<Specie>) -> Result<Self, KineticsError> {
        if species.is_empty() {
            return Err(KineticsError::EmptyRegistry);
        }
        let mut map_of_indices = HashMap::with_capacity(species.len());
        for (i, specie) in species.iter().enumerate() {
            if !(specie.mass.is_finite() && specie.mass > 0.0) {
                return Err(KineticsError::InvalidMass {
                    name: specie.name.clone(),
                    mass: specie.mass,
                });
            }
            if map_of_indices.insert(specie.name.clone(), i).is_some() {
                return Err(KineticsError::DuplicateSpecies(specie.name.clone()));
            }
        }
        Ok(Self {
            species,
            map_of_indices,
        })
    }
    /// number of species
    pub fn nb(&self) -> usize {
        self.species.len()
    }

    pub fn get(&self, index: usize) -> Option<&Specie> {
        self.species.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Specie> {
        self.species.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.species.iter().map(|s| s.name.clone()).collect()
    }

    pub fn get_index_by_name(&self, name: &str) -> Result<usize, KineticsError> {
        self.map_of_indices
            .get(name)
            .copied()
            .ok_or_else(|| KineticsError::UnknownSpecies(name.to_string()))
    }

    pub fn get_specie_by_name(&self, name: &str) -> Result<&Specie, KineticsError> {
        let i = self.get_index_by_name(name)?;
        Ok(&self.species[i])
    }
    /// index of a specie equal to the given one (same name, mass and number of atoms)
    pub fn get_index_by_instance(&self, specie: &Specie) -> Result<usize, KineticsError> {
        match self.map_of_indices.get(&specie.name) {
            Some(&i) if self.species[i] == *specie => Ok(i),
            _ => Err(KineticsError::UnknownSpecies(specie.name.clone())),
        }
    }
    ////////////////////////////////STATE VECTOR LAYOUT////////////////////////////////////////
    pub fn electron_temperature_slot(&self) -> usize {
        self.nb()
    }

    pub fn temperature_slot(&self, specie: &Specie) -> usize {
        self.nb() + specie.nb_atoms
    }
    /// minimum number of temperature slots: electron temperature plus one slot per atom-count
    /// group up to the largest molecule. A state may carry more temperatures than this.
    pub fn nb_temperature_slots(&self) -> usize {
        1 + self.species.iter().map(|s| s.nb_atoms).max().unwrap_or(0)
    }
    /// shortest state vector every temperature slot of the registry fits in
    pub fn min_state_len(&self) -> usize {
        self.nb() + self.nb_temperature_slots()
    }
    /// packs densities (registry order) and temperatures into one state vector;
    /// extra temperatures beyond `nb_temperature_slots()` are kept as they are
    pub fn assemble_state(
        &self,
        densities: &[f64],
        temperatures: &[f64],
    ) -> Result<DVector<f64>, KineticsError> {
        if densities.len() != self.nb() {
            return Err(KineticsError::StateLength {
                what: "densities",
                expected: self.nb(),
                got: densities.len(),
            });
        }
        if temperatures.len() < self.nb_temperature_slots() {
            return Err(KineticsError::StateLength {
                what: "temperatures",
                expected: self.nb_temperature_slots(),
                got: temperatures.len(),
            });
        }
        Ok(DVector::from_iterator(
            densities.len() + temperatures.len(),
            densities.iter().chain(temperatures.iter()).copied(),
        ))
    }
}
