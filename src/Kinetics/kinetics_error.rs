use thiserror::Error;

/// Errors raised while building species registries, reactions and mechanisms.
/// Evaluation of rates never fails: every check happens at construction time.
#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("Species '{0}' not found in the registry")]
    UnknownSpecies(String),
    #[error("{role} index {index} is greater than number of species {nb}")]
    IndexOutOfRange {
        role: &'static str,
        index: usize,
        nb: usize,
    },
    #[error("Reaction must have at least one {0}")]
    EmptySpeciesList(&'static str),
    #[error("Expected {expected} stoichiometric coefficients (one per species), got {got}")]
    CoefficientsLength { expected: usize, got: usize },
    #[error("Stoichiometric coefficient {value} of species '{name}' is negative")]
    NegativeCoefficient { name: String, value: f64 },
    #[error("Species '{0}' is defined more than once")]
    DuplicateSpecies(String),
    #[error("Species '{name}' has invalid mass {mass}, mass must be positive")]
    InvalidMass { name: String, mass: f64 },
    #[error("Species registry is empty")]
    EmptyRegistry,
    #[error("State vector of wrong size: expected {expected} {what}, got {got}")]
    StateLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Rate constant '{0}' not found in the rate constant library")]
    UnknownRateConstant(String),
    #[error("Reaction '{0}' was built on a different species registry")]
    RegistryMismatch(String),
    #[error("Failed to read file '{file}': {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("No '{section}' header found in file '{file}'")]
    MissingSection { section: String, file: String },
    #[error("Error parsing {section} data at line {line}, column {column}: {message}")]
    Parse {
        section: String,
        line: usize,
        column: usize,
        message: String,
    },
}
