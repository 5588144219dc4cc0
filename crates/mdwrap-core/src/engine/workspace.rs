use super::error::WrapperError;
use super::log::InvocationLog;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A uniquely named scratch directory owned by a single launch.
///
/// Two launches sharing a working directory never share a scratch directory, so their
/// instruction files cannot collide even when they use the same file name.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn create(parent: &Path) -> Result<Self, WrapperError> {
        let root = parent.join(Uuid::new_v4().to_string());
        fs::create_dir_all(&root).map_err(|e| WrapperError::io(&root, e))?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Removes the directory and everything in it. Failures are logged, never returned.
    pub fn remove(self, log: &mut InvocationLog) {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => log.info(&format!("Removed: [{}]", self.root.display())),
            Err(e) => log.warn(&format!(
                "Could not remove temporary folder {}: {}",
                self.root.display(),
                e
            )),
        }
    }

    /// Leaves the directory on disk.
    pub fn keep(self, log: &mut InvocationLog) {
        log.info(&format!(
            "Temporary folder kept (remove_tmp disabled): {}",
            self.root.display()
        ));
    }
}
