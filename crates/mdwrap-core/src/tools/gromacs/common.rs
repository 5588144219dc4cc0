use crate::core::command::{CommandVector, Delivery, Invocation};
use crate::core::files::{FileError, FileReference};
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::{OptionError, PropertySet};
use crate::engine::error::WrapperError;
use crate::tools::AssemblyContext;
use phf::{OrderedSet, phf_ordered_set};
use std::fs;
use std::path::{Path, PathBuf};

/// Default index groups `gmx make_ndx` generates for a solvated protein.
pub static SELECTIONS: OrderedSet<&'static str> = phf_ordered_set! {
    "System", "Protein", "Protein-H", "C-alpha", "Backbone", "MainChain", "MainChain+Cb",
    "MainChain+H", "SideChain", "SideChain-H", "Prot-Masses", "non-Protein", "Water", "SOL",
    "non-Water", "Ion", "NA", "CL", "Water_and_ions",
};

pub const DEFAULT_SELECTION: &str = "System";

pub static XVG: OrderedSet<&'static str> = phf_ordered_set! { "xmgrace", "xmgr", "none" };

pub static ENERGY_TERMS: OrderedSet<&'static str> = phf_ordered_set! {
    "Angle", "Proper-Dih.", "Improper-Dih.", "LJ-14", "Coulomb-14", "LJ-(SR)",
    "Coulomb-(SR)", "Coul.-recip.", "Position-Rest.", "Potential", "Kinetic-En.",
    "Total-Energy", "Temperature", "Pressure", "Constr.-rmsd", "Box-X", "Box-Y", "Box-Z",
    "Volume", "Density", "pV", "Enthalpy", "Vir-XX", "Vir-XY", "Vir-XZ", "Vir-YX", "Vir-YY",
    "Vir-YZ", "Vir-ZX", "Vir-ZY", "Vir-ZZ", "Pres-XX", "Pres-XY", "Pres-XZ", "Pres-YX",
    "Pres-YY", "Pres-YZ", "Pres-ZX", "Pres-ZY", "Pres-ZZ", "#Surf*SurfTen", "Box-Vel-XX",
    "Box-Vel-YY", "Box-Vel-ZZ", "Mu-X", "Mu-Y", "Mu-Z", "T-Protein", "T-non-Protein",
    "Lamb-Protein", "Lamb-non-Protein",
};

pub static CLUSTER_METHODS: OrderedSet<&'static str> = phf_ordered_set! {
    "linkage", "jarvis-patrick", "monte-carlo", "diagonalization", "gromos",
};

pub static PBC: OrderedSet<&'static str> = phf_ordered_set! {
    "none", "mol", "res", "atom", "nojump", "cluster", "whole",
};

pub static UNIT_CELL: OrderedSet<&'static str> = phf_ordered_set! { "rect", "tric", "compact" };

pub static FIT: OrderedSet<&'static str> = phf_ordered_set! {
    "none", "rot+trans", "rotxy+transxy", "translation", "transxy", "progressive",
};

/// Upper bound for `start`, `end` and `dt`, in picoseconds.
pub const TIME_LIMIT: i64 = 100_000;

/// Paths handed to a GROMACS operation. Which ones are required depends on the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GmxPaths {
    pub input_energy_path: Option<PathBuf>,
    pub input_structure_path: Option<PathBuf>,
    pub input_traj_path: Option<PathBuf>,
    pub input_index_path: Option<PathBuf>,
    pub output_xvg_path: Option<PathBuf>,
    pub output_pdb_path: Option<PathBuf>,
    pub output_str_path: Option<PathBuf>,
    pub output_traj_path: Option<PathBuf>,
}

impl GmxPaths {
    pub fn structure(&self) -> Result<FileReference, FileError> {
        FileReference::required_input(
            "input_structure_path",
            self.input_structure_path.as_deref(),
            FileFormat::GmxStructure,
        )
    }

    pub fn trajectory(&self) -> Result<FileReference, FileError> {
        FileReference::required_input(
            "input_traj_path",
            self.input_traj_path.as_deref(),
            FileFormat::GmxTrajectory,
        )
    }

    pub fn index(&self) -> Result<Option<FileReference>, FileError> {
        FileReference::optional_input(self.input_index_path.as_deref(), FileFormat::GmxIndex)
    }

    pub fn output(
        name: &'static str,
        path: Option<&Path>,
        format: FileFormat,
    ) -> Result<FileReference, FileError> {
        let path = path.ok_or(FileError::MissingRequiredInput(name))?;
        FileReference::output(path, format)
    }
}

/// The groups a selection option may name.
///
/// Without an index file these are the [`SELECTIONS`] GROMACS generates by default.
/// With one, only the groups declared in its `[ name ]` headers are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Groups {
    Default,
    Index(Vec<String>),
}

impl Groups {
    pub fn load(index: Option<&FileReference>) -> Result<Self, WrapperError> {
        match index {
            None => Ok(Groups::Default),
            Some(index) => {
                let content =
                    fs::read_to_string(index.path()).map_err(|e| WrapperError::io(index.path(), e))?;
                Ok(Groups::Index(parse_index_groups(&content)))
            }
        }
    }

    pub fn resolve(&self, props: &PropertySet, key: &str) -> Result<String, OptionError> {
        match self {
            Groups::Default => props.choice(key, &SELECTIONS, DEFAULT_SELECTION),
            Groups::Index(names) => props.choice_in(key, names, DEFAULT_SELECTION),
        }
    }
}

/// Extracts group names from the `[ name ]` headers of an index file.
///
/// Whitespace inside the brackets is dropped, so `[ Protein_chain A ]` yields
/// `Protein_chainA`.
pub fn parse_index_groups(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let open = line.find('[')?;
            let close = open + line[open..].find(']')?;
            Some(
                line[open + 1..close]
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>(),
            )
        })
        .filter(|name| !name.is_empty())
        .collect()
}

pub fn resolve_times(props: &PropertySet) -> Result<(i64, i64, i64), OptionError> {
    Ok((
        props.integer("start", 0, 0..=TIME_LIMIT)?,
        props.integer("end", 0, 0..=TIME_LIMIT)?,
        props.integer("dt", 0, 0..=TIME_LIMIT)?,
    ))
}

/// `gmx <subcommand> ...` with the selections redirected from the instruction file.
pub fn invocation(
    ctx: &AssemblyContext,
    subcommand: &str,
    build: impl FnOnce(CommandVector) -> CommandVector,
    selections: &[&str],
) -> Invocation {
    let mut instructions = InstructionDocument::new();
    instructions.extend(selections.iter().copied());
    Invocation {
        command: build(CommandVector::new(ctx.binary_path).arg(subcommand)),
        instructions,
        delivery: Delivery::Stdin,
    }
}
