use super::common::{self, ENERGY_TERMS, GmxPaths, XVG};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Extracts energy terms from an `.edr` file into an XVG table (`gmx energy`).
///
/// The requested `terms` are answered to the interactive prompt, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Energy {
    energy: FileReference,
    output: FileReference,
    terms: Vec<String>,
    xvg: String,
}

impl Energy {
    pub fn new(paths: &GmxPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        let energy = FileReference::required_input(
            "input_energy_path",
            paths.input_energy_path.as_deref(),
            FileFormat::GmxEnergy,
        )?;
        let output = GmxPaths::output(
            "output_xvg_path",
            paths.output_xvg_path.as_deref(),
            FileFormat::Xvg,
        )?;
        Ok(Self {
            energy,
            output,
            terms: props.string_list("terms", &ENERGY_TERMS, &["Potential"])?,
            xvg: props.choice("xvg", &XVG, "none")?,
        })
    }
}

impl Operation for Energy {
    fn kind(&self) -> OperationKind {
        OperationKind::GmxEnergy
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        let terms: Vec<&str> = self.terms.iter().map(String::as_str).collect();
        common::invocation(
            ctx,
            "energy",
            |cmd| {
                cmd.flag("-f", self.energy.to_arg())
                    .flag("-o", self.output.to_arg())
                    .flag("-xvg", self.xvg.as_str())
            },
            &terms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::Delivery;
    use crate::core::properties::OptionError;
    use crate::tools::gromacs::common::fixtures;

    #[test]
    fn terms_are_answered_on_stdin_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());
        let props = PropertySet::new()
            .with("terms", vec!["Potential", "Pressure", "Box-Z"])
            .with("xvg", "xmgr");
        let op = Energy::new(&paths, &props).unwrap();
        let inv = op.assemble(&AssemblyContext {
            binary_path: "gmx",
            instructions_path: Path::new("instructions.in"),
            working_dir: dir.path(),
            prefix: None,
            step: None,
        });

        let edr = paths.input_energy_path.as_ref().unwrap().display().to_string();
        let xvg = paths.output_xvg_path.as_ref().unwrap().display().to_string();
        assert_eq!(
            inv.command.args(),
            &["energy".to_string(), "-f".into(), edr, "-o".into(), xvg, "-xvg".into(), "xmgr".into()]
        );
        assert_eq!(inv.instructions.lines(), vec!["Potential", "Pressure", "Box-Z"]);
        assert_eq!(inv.delivery, Delivery::Stdin);
    }

    #[test]
    fn default_term_is_potential() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());
        let op = Energy::new(&paths, &PropertySet::new()).unwrap();
        assert_eq!(op.terms, vec!["Potential"]);
        assert_eq!(op.xvg, "none");
    }

    #[test]
    fn unknown_or_empty_terms_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());

        let props = PropertySet::new().with("terms", vec!["Potential", "Entropy"]);
        assert!(matches!(
            Energy::new(&paths, &props),
            Err(WrapperError::Option(OptionError::InvalidOption { .. }))
        ));

        let props = PropertySet::new().with("terms", Vec::<String>::new());
        assert!(Energy::new(&paths, &props).is_err());
    }

    #[test]
    fn energy_file_must_be_edr() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = fixtures::paths(dir.path());
        paths.input_energy_path = paths.input_traj_path.clone();
        assert!(Energy::new(&paths, &PropertySet::new()).unwrap_err().is_validation());
    }
}
