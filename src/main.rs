use log::{LevelFilter, error, info};
use nalgebra::DVector;
use plasma_kinetics::Kinetics::User_reactions::PlasmaMechanism;
use plasma_kinetics::Kinetics::User_species::{Specie, Species};
use plasma_kinetics::Kinetics::kinetics_error::KineticsError;
use plasma_kinetics::Kinetics::plasma_reaction::Reaction;
use plasma_kinetics::Kinetics::rate_constant::RateConstant;
use plasma_kinetics::Kinetics::reaction_api::ReactionCalculator;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::sync::Arc;

/// toy system of six species I0..I5, one reaction I2 + I4 -> I5
fn iodine_example() -> Result<(), KineticsError> {
    let species = Arc::new(Species::new(
        (0..6)
            .map(|i| Specie::new(&format!("I{}", i), 10.57e-27, 0))
            .collect(),
    )?);
    let k_diss_i2 = RateConstant::new("K_diss_I2", |temperatures: &[f64]| {
        info!("Temperatures : {:?}", temperatures);
        2.0
    });
    let reaction = Reaction::new(
        species.clone(),
        &["I2", "I4"],
        &["I5"],
        k_diss_i2,
        10.0,
        None,
        None,
    )?;
    // densities up to index 5, then temperatures
    let state = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, -181.0, -182.0]);
    info!("density change rate: {:?}", reaction.density_change_rate(&state).as_slice());
    info!("electron loss power: {}", reaction.electron_loss_power(&state));
    info!("{}", reaction);

    let mut mechanism = PlasmaMechanism::new(species);
    mechanism.add_reaction(reaction)?;
    mechanism.pretty_print_mechanism();
    mechanism.pretty_print_rates(&state);
    Ok(())
}

pub fn main() {
    let logger_ready = match TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("failed to initialize logger: {}", e);
            false
        }
    };
    if let Err(e) = iodine_example() {
        if logger_ready {
            error!("{}", e);
        } else {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
