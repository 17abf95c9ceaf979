use crate::Kinetics::User_species::Species;
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::physical_constants::PhysicalConstants;
use crate::Kinetics::rate_constant::RateConstantLibrary;
use crate::Kinetics::reaction_api::{ReactionCalculator, ReactionEnum, ReactionRecord};
use crate::Utils::load_from_file::MechanismDescription;
use log::info;
use nalgebra::DVector;
use prettytable::{Cell, Row, Table};
use std::sync::Arc;
/// THE STRUCT PlasmaMechanism COLLECTS ALL REACTION CHANNELS OF A MODEL BUILT ON ONE SPECIES REGISTRY.
/// It sums the contributions of every channel, which is what the time integration loop of a
/// reactor model needs at every step:
/// 1) total d(n)/dt of every specie
/// 2) total power exchanged by electrons
/// Reactions may be added one by one or built from the records of a mechanism file.
#[derive(Debug, Clone)]
pub struct PlasmaMechanism {
    pub species: Arc<Species>,
    pub constants: PhysicalConstants,
    pub reactions: Vec<ReactionEnum>,
}

impl PlasmaMechanism {
    pub fn new(species: Arc<Species>) -> Self {
        Self {
            species,
            constants: PhysicalConstants::default(),
            reactions: Vec::new(),
        }
    }
    /////////////////////////////////SETTING REACTIONS///////////////////////////////////////////
    /// adds a reaction; it must index the same registry as the mechanism
    pub fn add_reaction<R: Into<ReactionEnum>>(&mut self, reaction: R) -> Result<(), KineticsError> {
        let reaction = reaction.into();
        let registry = &reaction.base().species;
        if !Arc::ptr_eq(registry, &self.species) && **registry != *self.species {
            return Err(KineticsError::RegistryMismatch(reaction.to_string()));
        }
        self.reactions.push(reaction);
        Ok(())
    }
    /// builds and adds reactions described by records; nothing is added if one record fails
    pub fn add_records(
        &mut self,
        records: &[ReactionRecord],
        library: &RateConstantLibrary,
    ) -> Result<(), KineticsError> {
        let built = records
            .iter()
            .map(|record| record.build(self.species.clone(), library, self.constants))
            .collect::<Result<Vec<ReactionEnum>, KineticsError>>()?;
        self.reactions.extend(built);
        Ok(())
    }
    /// constructs the mechanism from a parsed mechanism file
    pub fn from_description(
        description: MechanismDescription,
        library: &RateConstantLibrary,
    ) -> Result<Self, KineticsError> {
        let mut mechanism = Self {
            species: Arc::new(description.species),
            constants: description.constants,
            reactions: Vec::new(),
        };
        mechanism.add_records(&description.reactions, library)?;
        info!(
            "mechanism of {} reactions on {} species constructed",
            mechanism.len(),
            mechanism.species.nb()
        );
        Ok(mechanism)
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReactionEnum> {
        self.reactions.iter()
    }
    /////////////////////////////////SUMMING CONTRIBUTIONS///////////////////////////////////////////
    pub fn total_density_change_rate(&self, state: &DVector<f64>) -> DVector<f64> {
        self.reactions
            .iter()
            .fold(DVector::<f64>::zeros(self.species.nb()), |acc, reaction| {
                acc + reaction.density_change_rate(state)
            })
    }

    pub fn total_electron_loss_power(&self, state: &DVector<f64>) -> f64 {
        self.reactions
            .iter()
            .map(|reaction| reaction.electron_loss_power(state))
            .sum()
    }
    ///////////////////////////INPUT/OUTPUT/////////////////////////////////////////////////////////
    pub fn equations(&self) -> Vec<String> {
        self.reactions.iter().map(|r| r.to_string()).collect()
    }

    pub fn mechanism_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("#"),
            Cell::new("type"),
            Cell::new("equation"),
            Cell::new("energy threshold"),
        ]));
        for (i, reaction) in self.reactions.iter().enumerate() {
            table.add_row(Row::new(vec![
                Cell::new(&i.to_string()),
                Cell::new(reaction.kind()),
                Cell::new(&reaction.to_string()),
                Cell::new(&reaction.base().energy_threshold.to_string()),
            ]));
        }
        table
    }

    pub fn pretty_print_mechanism(&self) {
        self.mechanism_table().printstd();
    }
    /// table of total d(n)/dt per specie at the given state
    pub fn rates_table(&self, state: &DVector<f64>) -> Table {
        let rates = self.total_density_change_rate(state);
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("specie"), Cell::new("dn/dt")]));
        for (specie, rate) in self.species.iter().zip(rates.iter()) {
            table.add_row(Row::new(vec![
                Cell::new(&specie.name),
                Cell::new(&format!("{:e}", rate)),
            ]));
        }
        table
    }

    pub fn pretty_print_rates(&self, state: &DVector<f64>) {
        self.rates_table(state).printstd();
    }
}
