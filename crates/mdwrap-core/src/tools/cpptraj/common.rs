use crate::core::command::{CommandVector, Delivery, Invocation};
use crate::core::files::{FileError, FileReference};
use crate::core::formats::FileFormat;
use crate::core::instructions::InstructionDocument;
use crate::core::properties::{OptionError, PropertySet};
use crate::engine::error::WrapperError;
use crate::tools::AssemblyContext;
use phf::{OrderedMap, OrderedSet, phf_ordered_map, phf_ordered_set};
use std::path::PathBuf;

/// A named cpptraj atom selection and the expression selecting everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    pub selection: &'static str,
    pub complement: &'static str,
}

impl Mask {
    /// The `strip` line that keeps only this selection, if anything needs stripping.
    pub fn strip_line(&self) -> Option<String> {
        if self.complement.is_empty() {
            None
        } else {
            Some(format!("strip {}", self.complement))
        }
    }
}

pub static MASKS: OrderedMap<&'static str, Mask> = phf_ordered_map! {
    "c-alpha" => Mask { selection: "@CA", complement: "!@CA" },
    "backbone" => Mask { selection: "@CA,C,O,N", complement: "!@CA,C,O,N" },
    "all-atoms" => Mask { selection: "", complement: "" },
    "heavy-atoms" => Mask { selection: "!@H=", complement: "@H=" },
    "side-chain" => Mask { selection: "!(:WAT | @CA,C,O,N)", complement: ":WAT | @CA,C,O,N" },
    "solute" => Mask { selection: "!(:WAT | @Na+,Cl-,K+)", complement: ":WAT | @Na+,Cl-,K+" },
    "ions" => Mask { selection: "@Na+,Cl-,K+", complement: "!@Na+,Cl-,K+" },
    "solvent" => Mask { selection: ":WAT", complement: "!:WAT" },
};

pub const DEFAULT_MASK: &str = "all-atoms";

/// What fluctuation analyses superimpose frames onto before measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    First,
    Average,
    Experimental,
}

pub static REFERENCES: OrderedMap<&'static str, Reference> = phf_ordered_map! {
    "first" => Reference::First,
    "average" => Reference::Average,
    "experimental" => Reference::Experimental,
};

/// Output trajectory formats understood by `trajout` and `average`.
pub static FORMATS: OrderedSet<&'static str> = phf_ordered_set! {
    "crd", "cdf", "netcdf", "restart", "ncrestart", "restartnc", "dcd", "charmm", "cor",
    "pdb", "mol2", "trr", "gro", "binpos", "xtc", "cif", "arc", "sqm", "sdf", "conflib",
};

pub const DEFAULT_FORMAT: &str = "netcdf";

const FRAME_LIMIT: i64 = 100_000;

/// Paths handed to a cpptraj operation. Which ones are required depends on the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpptrajPaths {
    pub input_top_path: Option<PathBuf>,
    pub input_traj_path: Option<PathBuf>,
    pub input_exp_path: Option<PathBuf>,
    pub output_cpptraj_path: Option<PathBuf>,
}

/// The topology and trajectory every cpptraj operation starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrajectoryInput {
    pub topology: FileReference,
    pub trajectory: FileReference,
}

impl TrajectoryInput {
    pub fn from_paths(paths: &CpptrajPaths) -> Result<Self, WrapperError> {
        Ok(Self {
            topology: FileReference::required_input(
                "input_top_path",
                paths.input_top_path.as_deref(),
                FileFormat::AmberTopology,
            )?,
            trajectory: FileReference::required_input(
                "input_traj_path",
                paths.input_traj_path.as_deref(),
                FileFormat::AmberTrajectory,
            )?,
        })
    }

    pub fn parm_line(&self) -> String {
        format!("parm {}", self.topology.to_arg())
    }
}

pub fn required_output(
    paths: &CpptrajPaths,
    format: FileFormat,
) -> Result<FileReference, WrapperError> {
    let path = paths
        .output_cpptraj_path
        .as_deref()
        .ok_or(FileError::MissingRequiredInput("output_cpptraj_path"))?;
    Ok(FileReference::output(path, format)?)
}

/// Which frames of the input trajectory are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSlice {
    pub start: i64,
    pub end: i64,
    pub steps: i64,
}

impl FrameSlice {
    pub fn from_properties(props: &PropertySet) -> Result<Self, OptionError> {
        Ok(Self {
            start: props.integer("start", 1, 1..=FRAME_LIMIT)?,
            end: props.integer("end", -1, -1..=FRAME_LIMIT)?,
            steps: props.integer("steps", 1, 1..=FRAME_LIMIT)?,
        })
    }

    /// A single frame, read as `<n> <n> 1`.
    pub fn snapshot(props: &PropertySet) -> Result<Self, OptionError> {
        let frame = props.integer("snapshot", 1, 1..=FRAME_LIMIT)?;
        Ok(Self {
            start: frame,
            end: frame,
            steps: 1,
        })
    }

    pub fn trajin_line(&self, trajectory: &FileReference) -> String {
        format!(
            "trajin {} {} {} {}",
            trajectory.to_arg(),
            self.start,
            self.end,
            self.steps
        )
    }
}

pub fn resolve_mask(props: &PropertySet) -> Result<Mask, OptionError> {
    props.lookup("mask", &MASKS, DEFAULT_MASK)
}

pub fn resolve_format(props: &PropertySet) -> Result<String, OptionError> {
    props.choice("format", &FORMATS, DEFAULT_FORMAT)
}

/// `<keyword> <out> <format>`, as used by `trajout` and `average`.
pub fn write_line(keyword: &str, output: &FileReference, format: &str) -> String {
    format!("{} {} {}", keyword, output.to_arg(), format)
}

/// A resolved reference together with the experimental structure it may need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceFrame {
    First,
    Average,
    Experimental(FileReference),
}

impl ReferenceFrame {
    pub fn resolve(props: &PropertySet, paths: &CpptrajPaths) -> Result<Self, WrapperError> {
        Ok(match props.lookup("reference", &REFERENCES, "first")? {
            Reference::First => ReferenceFrame::First,
            Reference::Average => ReferenceFrame::Average,
            Reference::Experimental => ReferenceFrame::Experimental(
                FileReference::required_input(
                    "input_exp_path",
                    paths.input_exp_path.as_deref(),
                    FileFormat::AmberReference,
                )?,
            ),
        })
    }

    pub fn lines(&self, mask: &Mask) -> Vec<String> {
        match self {
            ReferenceFrame::First => Vec::new(),
            ReferenceFrame::Average => vec![
                "average crdset MyAvg".to_string(),
                "run".to_string(),
                format!("rms ref MyAvg {}", mask.selection),
            ],
            ReferenceFrame::Experimental(exp) => vec![
                format!("reference {} [ExpRef]", exp.to_arg()),
                format!("rms ref [ExpRef] {}", mask.selection),
            ],
        }
    }
}

/// Every cpptraj launch is `cpptraj -i <instructions>`.
pub fn invocation(ctx: &AssemblyContext, instructions: InstructionDocument) -> Invocation {
    Invocation {
        command: CommandVector::new(ctx.binary_path)
            .flag("-i", ctx.instructions_path.display().to_string()),
        instructions,
        delivery: Delivery::Argument,
    }
}
