use std::path::Path;

/// Returns true when every declared output exists and is non-empty.
///
/// Only presence and size are checked. An output written by an earlier launch with
/// different options still counts as complete.
pub fn outputs_complete<P: AsRef<Path>>(outputs: &[P]) -> bool {
    !outputs.is_empty()
        && outputs.iter().all(|p| {
            std::fs::metadata(p.as_ref())
                .map(|m| m.is_file() && m.len() > 0)
                .unwrap_or(false)
        })
}
