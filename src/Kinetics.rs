/// Plasma reaction kinetics: species registry, reaction channels and their contributions to the
/// density and energy balance of a reactor model.
///
/// State vector layout shared by every module:
/// `[n_e, n_1, ..., n_(N-1), T_e, T_(1 atom), T_(2 atoms), ...]`
/// the first N entries are number densities in registry order, the rest are temperatures.
pub mod kinetics_error;
/// Species registry: ordered, name-keyed collection of species with their mass and number of atoms.
/// The index of a specie in the registry is its offset in the state vector.
///
///  # Examples
/// ```
/// use plasma_kinetics::Kinetics::User_species::{Specie, Species};
/// let species = Species::new(vec![
///     Specie::new("e", 9.1093837015e-31, 0),
///     Specie::new("N2", 4.65e-26, 2),
/// ]).unwrap();
/// assert_eq!(species.get_index_by_name("N2").unwrap(), 1);
/// assert_eq!(species.temperature_slot(species.get_specie_by_name("N2").unwrap()), 4);
/// ```
#[allow(non_snake_case)]
pub mod User_species;
/// physical constants injected into reactions that need them
pub mod physical_constants;
/// named opaque rate constant functions and a library to resolve them by name
pub mod rate_constant;
/// one reaction channel: stoichiometry, mass-action density change rate and loss power
pub mod plasma_reaction;
/// elastic collisions of electrons with heavy species
pub mod elastic_collision;
/// common interface of all reaction channels, dispatched over [`reaction_api::ReactionEnum`]
pub mod reaction_api;
/// processing of user-chosen reactions: sums the contributions of all channels of a mechanism
///
///  # Examples
/// ```
/// use std::sync::Arc;
/// use plasma_kinetics::Kinetics::User_species::{Specie, Species};
/// use plasma_kinetics::Kinetics::User_reactions::PlasmaMechanism;
/// use plasma_kinetics::Kinetics::plasma_reaction::Reaction;
/// use plasma_kinetics::Kinetics::rate_constant::RateConstant;
/// let species = Arc::new(Species::new(vec![
///     Specie::new("A", 1e-26, 0),
///     Specie::new("B", 1e-26, 0),
/// ]).unwrap());
/// let mut mechanism = PlasmaMechanism::new(species.clone());
/// let k = RateConstant::constant("K_AB", 0.5);
/// mechanism.add_reaction(Reaction::new(species, &["A"], &["B"], k, 1.0, None, None).unwrap()).unwrap();
/// mechanism.pretty_print_mechanism();
/// ```
#[allow(non_snake_case)]
pub mod User_reactions;
