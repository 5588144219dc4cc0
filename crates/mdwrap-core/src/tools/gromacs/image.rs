use super::common::{self, FIT, GmxPaths, Groups, PBC, UNIT_CELL};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::Path;

/// Corrects periodicity and optionally centres and fits a trajectory (`gmx trjconv -pbc`).
///
/// `trjconv` prompts for up to three groups, in this order: the fit group when `fit` is not
/// `none`, the centring group when `center` is set, and always the output group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    structure: FileReference,
    trajectory: FileReference,
    index: Option<FileReference>,
    output: FileReference,
    fit_selection: String,
    center_selection: String,
    output_selection: String,
    pbc: String,
    center: bool,
    ur: String,
    fit: String,
}

impl Image {
    pub fn new(paths: &GmxPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        let structure = paths.structure()?;
        let trajectory = paths.trajectory()?;
        let index = paths.index()?;
        let output = GmxPaths::output(
            "output_traj_path",
            paths.output_traj_path.as_deref(),
            FileFormat::GmxTrajectoryOutput,
        )?;
        let groups = Groups::load(index.as_ref())?;
        Ok(Self {
            fit_selection: groups.resolve(props, "fit_selection")?,
            center_selection: groups.resolve(props, "center_selection")?,
            output_selection: groups.resolve(props, "output_selection")?,
            pbc: props.choice("pbc", &PBC, "mol")?,
            center: props.boolean("center", true)?,
            ur: props.choice("ur", &UNIT_CELL, "compact")?,
            fit: props.choice("fit", &FIT, "none")?,
            structure,
            trajectory,
            index,
            output,
        })
    }

    fn selections(&self) -> Vec<&str> {
        let mut selections = Vec::with_capacity(3);
        if self.fit != "none" {
            selections.push(self.fit_selection.as_str());
        }
        if self.center {
            selections.push(self.center_selection.as_str());
        }
        selections.push(self.output_selection.as_str());
        selections
    }
}

impl Operation for Image {
    fn kind(&self) -> OperationKind {
        OperationKind::GmxImage
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        common::invocation(
            ctx,
            "trjconv",
            |cmd| {
                cmd.flag("-f", self.trajectory.to_arg())
                    .flag("-s", self.structure.to_arg())
                    .flag("-fit", self.fit.as_str())
                    .flag("-o", self.output.to_arg())
                    .flag("-pbc", self.pbc.as_str())
                    .flag("-ur", self.ur.as_str())
                    .flag_if(self.center, "-center")
                    .flag_opt("-n", self.index.as_ref().map(FileReference::to_arg))
            },
            &self.selections(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::OptionError;
    use crate::tools::gromacs::common::fixtures;

    fn assemble(paths: &GmxPaths, props: &PropertySet) -> Invocation {
        Image::new(paths, props).unwrap().assemble(&AssemblyContext {
            binary_path: "gmx",
            instructions_path: Path::new("instructions.in"),
            working_dir: Path::new("."),
            prefix: None,
            step: None,
        })
    }

    #[test]
    fn defaults_center_and_write_system() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());
        let inv = assemble(&paths, &PropertySet::new());

        let args = inv.command.args();
        assert!(args.ends_with(&[
            "-pbc".to_string(),
            "mol".into(),
            "-ur".into(),
            "compact".into(),
            "-center".into(),
        ]));
        assert!(args.contains(&"-fit".to_string()));
        assert_eq!(inv.instructions.lines(), vec!["System", "System"]);
    }

    #[test]
    fn fit_adds_a_leading_selection_and_no_center_drops_one() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());
        let props = PropertySet::new()
            .with("fit", "rot+trans")
            .with("fit_selection", "C-alpha")
            .with("center", false)
            .with("output_selection", "Protein");
        let inv = assemble(&paths, &props);

        assert!(!inv.command.args().contains(&"-center".to_string()));
        assert_eq!(inv.instructions.lines(), vec!["C-alpha", "Protein"]);
    }

    #[test]
    fn all_three_selections_in_prompt_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::with_index(dir.path());
        let props = PropertySet::new()
            .with("fit", "progressive")
            .with("fit_selection", "Protein")
            .with("center_selection", "Custom_group")
            .with("pbc", "whole")
            .with("ur", "tric");
        let inv = assemble(&paths, &props);
        assert_eq!(
            inv.instructions.lines(),
            vec!["Protein", "Custom_group", "System"]
        );
        assert!(inv.command.args().contains(&"whole".to_string()));
    }

    #[test]
    fn invalid_pbc_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());
        let props = PropertySet::new().with("pbc", "box");
        assert!(matches!(
            Image::new(&paths, &props),
            Err(WrapperError::Option(OptionError::InvalidOption { .. }))
        ));
    }
}
