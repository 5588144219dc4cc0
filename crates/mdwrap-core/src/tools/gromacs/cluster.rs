use super::common::{self, CLUSTER_METHODS, GmxPaths, Groups};
use crate::core::command::Invocation;
use crate::core::files::FileReference;
use crate::core::formats::FileFormat;
use crate::core::properties::PropertySet;
use crate::engine::error::WrapperError;
use crate::tools::{AssemblyContext, Operation, OperationKind};
use std::path::{Path, PathBuf};

const DEFAULT_LOG: &str = "cluster.log";
const DEFAULT_DIST: &str = "rmsd-dist.xvg";
const DEFAULT_XPM: &str = "rmsd-clust.xpm";

/// Clusters trajectory frames by RMSD and writes the cluster centres (`gmx cluster`).
///
/// The fit and output groups are answered on standard input. The auxiliary log, distance
/// distribution and matrix files are kept next to the caller's working directory, or at
/// `log_path`, `xvg_path` and `xpm_path` when configured. Either way their file names get
/// the launch's `<prefix>_<step>_` naming.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    structure: FileReference,
    trajectory: FileReference,
    index: Option<FileReference>,
    output: FileReference,
    fit_selection: String,
    output_selection: String,
    method: String,
    cutoff: f64,
    dista: bool,
    log_path: Option<PathBuf>,
    xvg_path: Option<PathBuf>,
    xpm_path: Option<PathBuf>,
}

impl Cluster {
    pub fn new(paths: &GmxPaths, props: &PropertySet) -> Result<Self, WrapperError> {
        let structure = paths.structure()?;
        let trajectory = paths.trajectory()?;
        let index = paths.index()?;
        let output = GmxPaths::output(
            "output_pdb_path",
            paths.output_pdb_path.as_deref(),
            FileFormat::GmxStructure,
        )?;
        let groups = Groups::load(index.as_ref())?;
        Ok(Self {
            fit_selection: groups.resolve(props, "fit_selection")?,
            output_selection: groups.resolve(props, "output_selection")?,
            method: props.choice("method", &CLUSTER_METHODS, "linkage")?,
            cutoff: props.positive_float("cutoff", 0.1)?,
            dista: props.boolean("dista", false)?,
            log_path: props.optional_string("log_path")?.map(PathBuf::from),
            xvg_path: props.optional_string("xvg_path")?.map(PathBuf::from),
            xpm_path: props.optional_string("xpm_path")?.map(PathBuf::from),
            structure,
            trajectory,
            index,
            output,
        })
    }
}

fn auxiliary_path(ctx: &AssemblyContext, configured: Option<&Path>, default: &str) -> String {
    let path = match configured {
        Some(path) => match path.file_name() {
            Some(name) => path.with_file_name(ctx.create_name(&name.to_string_lossy())),
            None => path.join(ctx.create_name(default)),
        },
        None => ctx.working_dir.join(ctx.create_name(default)),
    };
    path.display().to_string()
}

impl Operation for Cluster {
    fn kind(&self) -> OperationKind {
        OperationKind::GmxCluster
    }

    fn outputs(&self) -> Vec<&Path> {
        vec![self.output.path()]
    }

    fn assemble(&self, ctx: &AssemblyContext) -> Invocation {
        common::invocation(
            ctx,
            "cluster",
            |cmd| {
                cmd.flag("-g", auxiliary_path(ctx, self.log_path.as_deref(), DEFAULT_LOG))
                    .flag("-dist", auxiliary_path(ctx, self.xvg_path.as_deref(), DEFAULT_DIST))
                    .flag("-o", auxiliary_path(ctx, self.xpm_path.as_deref(), DEFAULT_XPM))
                    .flag("-s", self.structure.to_arg())
                    .flag("-f", self.trajectory.to_arg())
                    .flag("-cl", self.output.to_arg())
                    .flag("-cutoff", self.cutoff.to_string())
                    .flag("-method", self.method.as_str())
                    .flag_opt("-n", self.index.as_ref().map(FileReference::to_arg))
                    .flag_if(self.dista, "-dista")
            },
            &[self.fit_selection.as_str(), self.output_selection.as_str()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::OptionError;
    use crate::tools::gromacs::common::fixtures;

    #[test]
    fn auxiliary_outputs_default_into_working_dir_with_step_naming() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());
        let op = Cluster::new(&paths, &PropertySet::new()).unwrap();
        let work = dir.path().join("work");
        let inv = op.assemble(&AssemblyContext {
            binary_path: "gmx",
            instructions_path: Path::new("instructions.in"),
            working_dir: &work,
            prefix: Some("p"),
            step: Some("clu"),
        });

        let args = inv.command.args();
        assert_eq!(args[0], "cluster");
        assert_eq!(args[1..3], ["-g".to_string(), work.join("p_clu_cluster.log").display().to_string()]);
        assert_eq!(args[4], work.join("p_clu_rmsd-dist.xvg").display().to_string());
        assert_eq!(args[6], work.join("p_clu_rmsd-clust.xpm").display().to_string());
        assert!(args.ends_with(&["-cutoff".to_string(), "0.1".into(), "-method".into(), "linkage".into()]));
        assert_eq!(inv.instructions.lines(), vec!["System", "System"]);
    }

    #[test]
    fn configured_auxiliary_paths_keep_their_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());
        let props = PropertySet::new()
            .with("xvg_path", "analysis/dist.xvg")
            .with("xpm_path", "matrix.xpm");
        let op = Cluster::new(&paths, &props).unwrap();
        let inv = op.assemble(&AssemblyContext {
            binary_path: "gmx",
            instructions_path: Path::new("instructions.in"),
            working_dir: Path::new("."),
            prefix: None,
            step: Some("clu"),
        });

        let args = inv.command.args();
        assert_eq!(args[4], Path::new("analysis/clu_dist.xvg").display().to_string());
        assert_eq!(args[6], "clu_matrix.xpm");
    }

    #[test]
    fn index_and_dista_append_optional_flags() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::with_index(dir.path());
        let props = PropertySet::new()
            .with("fit_selection", "Protein")
            .with("output_selection", "Custom_group")
            .with("method", "gromos")
            .with("cutoff", 0.25)
            .with("dista", true)
            .with("log_path", "logs/cluster.log");
        let op = Cluster::new(&paths, &props).unwrap();
        let inv = op.assemble(&AssemblyContext {
            binary_path: "gmx",
            instructions_path: Path::new("instructions.in"),
            working_dir: dir.path(),
            prefix: None,
            step: None,
        });

        let ndx = paths.input_index_path.as_ref().unwrap().display().to_string();
        let args = inv.command.args();
        assert_eq!(args[2], Path::new("logs/cluster.log").display().to_string());
        assert!(args.ends_with(&["-n".to_string(), ndx, "-dista".into()]));
        assert!(args.contains(&"gromos".to_string()));
        assert!(args.contains(&"0.25".to_string()));
        assert_eq!(inv.instructions.lines(), vec!["Protein", "Custom_group"]);
    }

    #[test]
    fn non_positive_cutoff_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixtures::paths(dir.path());
        let props = PropertySet::new().with("cutoff", -0.5);
        assert!(matches!(
            Cluster::new(&paths, &props),
            Err(WrapperError::Option(OptionError::OutOfRange { .. }))
        ));
    }
}
