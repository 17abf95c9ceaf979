use serde::{Deserialize, Serialize};

/// electron mass, kg (CODATA 2018)
pub const M_ELECTRON: f64 = 9.1093837015e-31;
/// Boltzmann constant, J/K (exact since the 2019 SI redefinition)
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Physical constants handed to reactions that need them.
/// Defaults to CODATA values; any field may be overridden from the CONSTANTS section of a mechanism file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// electron mass
    pub m_e: f64,
    /// Boltzmann constant
    pub k_b: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            m_e: M_ELECTRON,
            k_b: K_BOLTZMANN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let constants: PhysicalConstants = serde_json::from_str(r#"{"k_b": 1.0}"#).unwrap();
        assert_eq!(constants.k_b, 1.0);
        assert_eq!(constants.m_e, M_ELECTRON);
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let constants: PhysicalConstants = serde_json::from_str("{}").unwrap();
        assert_eq!(constants, PhysicalConstants::default());
    }
}
