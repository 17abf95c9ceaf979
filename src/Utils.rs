/// reading of mechanism description files (species, physical constants, reactions)
pub mod load_from_file;
