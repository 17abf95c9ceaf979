use crate::Kinetics::User_species::Species;
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::physical_constants::PhysicalConstants;
use crate::Kinetics::reaction_api::ReactionRecord;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use std::fs;
/*
Mechanism file format: plain text document with headers, every header is followed by a JSON section
    SPECIES            (required) array of {"name": .., "mass": .., "nb_atoms": ..}
    CONSTANTS          (optional) {"m_e": .., "k_b": ..}, missing fields take CODATA values
    REACTIONS          (required) array of reaction records, "type" is "reaction" or "elastic_collision"
A section ends at the next header: a non-empty line made of uppercase letters and '_' only
*/

/// Everything read from a mechanism file, ready to be turned into a PlasmaMechanism
#[derive(Debug, Clone)]
pub struct MechanismDescription {
    pub species: Species,
    pub constants: PhysicalConstants,
    pub reactions: Vec<ReactionRecord>,
}

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_mechanism(&self) -> Result<MechanismDescription, KineticsError> {
        load_mechanism_from_file(&self.file_name)
    }
}

pub fn load_mechanism_from_file(file_name: &str) -> Result<MechanismDescription, KineticsError> {
    let content = fs::read_to_string(file_name).map_err(|e| KineticsError::Io {
        file: file_name.to_string(),
        source: e,
    })?;
    let description = parse_mechanism(&content, file_name)?;
    info!(
        "Successfully parsed mechanism from file '{}': {} species, {} reactions",
        file_name,
        description.species.nb(),
        description.reactions.len()
    );
    Ok(description)
}
/// `source` names the document in error messages
pub fn parse_mechanism(content: &str, source: &str) -> Result<MechanismDescription, KineticsError> {
    let lines: Vec<&str> = content.lines().collect();

    let species: Species = parse_section(&lines, "SPECIES", source)?.ok_or_else(|| {
        KineticsError::MissingSection {
            section: "SPECIES".to_string(),
            file: source.to_string(),
        }
    })?;
    let constants: PhysicalConstants =
        parse_section(&lines, "CONSTANTS", source)?.unwrap_or_default();
    let reactions: Vec<ReactionRecord> =
        parse_section(&lines, "REACTIONS", source)?.ok_or_else(|| {
            KineticsError::MissingSection {
                section: "REACTIONS".to_string(),
                file: source.to_string(),
            }
        })?;
    if reactions.is_empty() {
        warn!("Mechanism '{}' contains no reactions", source);
    }
    Ok(MechanismDescription {
        species,
        constants,
        reactions,
    })
}

fn is_header(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_uppercase() || c == '_')
}
/// Ok(None) if the header is absent
fn parse_section<T: DeserializeOwned>(
    lines: &[&str],
    header: &str,
    source: &str,
) -> Result<Option<T>, KineticsError> {
    // Find the header
    let start_index = match lines
        .iter()
        .position(|line| line.trim().to_uppercase() == header)
    {
        Some(i) => i + 1,
        None => return Ok(None),
    };
    // Find the end index (next header or end of file)
    let end_index = lines[start_index..]
        .iter()
        .position(|line| is_header(line))
        .map_or(lines.len(), |i| start_index + i);

    let section = lines[start_index..end_index].join("\n");
    match serde_json::from_str::<T>(&section) {
        Ok(data) => Ok(Some(data)),
        Err(e) => {
            let error_line = e.line();
            let error_column = e.column();
            // serde counts lines from 1 inside the section
            let actual_line = start_index + error_line.max(1) - 1;
            error!(
                "Error parsing {} section of '{}' at line {}, column {}: {}",
                header,
                source,
                actual_line + 1,
                error_column,
                e
            );
            if let Some(problem_line) = lines.get(actual_line) {
                error!("Problematic line: {}", problem_line);
                if error_column >= 1 && error_column <= problem_line.len() {
                    error!("{}", " ".repeat(error_column - 1) + "^");
                }
            }
            Err(KineticsError::Parse {
                section: header.to_string(),
                line: actual_line + 1,
                column: error_column,
                message: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::physical_constants::M_ELECTRON;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ARGON: &str = r#"
SPECIES
[
    {"name": "e", "mass": 9.1093837015e-31, "nb_atoms": 0},
    {"name": "Ar", "mass": 6.6335e-26, "nb_atoms": 1},
    {"name": "Ar+", "mass": 6.6335e-26, "nb_atoms": 1}
]
CONSTANTS
{"k_b": 1.0}
REACTIONS
[
    {"type": "reaction", "reactives": ["e", "Ar"], "products": ["Ar+", "e"],
     "rate_constant": "K_ion", "energy_threshold": 15.76, "stoechio_coeffs": [2.0, 1.0, 1.0]},
    {"type": "elastic_collision", "colliding_specie": "Ar", "rate_constant": "K_el", "energy_threshold": 0.0}
]
"#;

    #[test]
    fn test_parse_mechanism() {
        let description = parse_mechanism(ARGON, "argon").unwrap();
        assert_eq!(description.species.nb(), 3);
        assert_eq!(description.constants.k_b, 1.0);
        assert_eq!(description.constants.m_e, M_ELECTRON);
        assert_eq!(description.reactions.len(), 2);
        match &description.reactions[1] {
            ReactionRecord::ElasticCollision {
                colliding_specie, ..
            } => assert_eq!(colliding_specie, "Ar"),
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_constants_are_optional() {
        let content = ARGON.replace("CONSTANTS\n{\"k_b\": 1.0}\n", "");
        let description = parse_mechanism(&content, "argon").unwrap();
        assert_eq!(description.constants, PhysicalConstants::default());
    }

    #[test]
    fn test_missing_section() {
        let content = "SPECIES\n[{\"name\": \"e\", \"mass\": 9.1e-31}]\n";
        let result = parse_mechanism(content, "no_reactions");
        assert!(matches!(
            result,
            Err(KineticsError::MissingSection { section, .. }) if section == "REACTIONS"
        ));
    }

    #[test]
    fn test_parse_error_reports_line() {
        // the trailing comma is reported where the array closes, line 4 of the document
        let content = "SPECIES\n[\n    {\"name\": \"e\", \"mass\": 9.1e-31},\n]\nREACTIONS\n[]\n";
        match parse_mechanism(content, "broken") {
            Err(KineticsError::Parse { section, line, .. }) => {
                assert_eq!(section, "SPECIES");
                assert_eq!(line, 4);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_species_is_reported() {
        let content = "SPECIES\n[{\"name\": \"e\", \"mass\": -1.0}]\nREACTIONS\n[]\n";
        assert!(matches!(
            parse_mechanism(content, "negative_mass"),
            Err(KineticsError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ARGON.as_bytes()).unwrap();
        let loader = LoadData::new(file.path().to_str().unwrap().to_string());
        let description = loader.load_mechanism().unwrap();
        assert_eq!(description.species.names(), vec!["e", "Ar", "Ar+"]);
    }

    #[test]
    fn test_missing_file() {
        let loader = LoadData::new("definitely_not_here.mech".to_string());
        assert!(matches!(
            loader.load_mechanism(),
            Err(KineticsError::Io { .. })
        ));
    }
}
