//! Run-target selection.

use anyhow::bail;

/// Target volume for one run: exactly one of a row count or a megabyte
/// budget. The choice is made before the core is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunTarget {
    /// Generate exactly this many rows.
    Rows(u64),
    /// Generate approximately this many megabytes (row count is
    /// estimated before generation starts).
    Megabytes(u64),
}

impl RunTarget {
    /// Build the target from optional CLI values, enforcing the
    /// exactly-one invariant before any generation begins.
    pub fn from_options(rows: Option<u64>, megabytes: Option<u64>) -> anyhow::Result<Self> {
        match (rows, megabytes) {
            (Some(_), Some(_)) => {
                bail!("--rows and --mbs cannot be used together")
            }
            (None, None) => bail!("one of --rows or --mbs is required"),
            (Some(0), None) | (None, Some(0)) => {
                bail!("the generation target must be greater than zero")
            }
            (Some(rows), None) => Ok(RunTarget::Rows(rows)),
            (None, Some(megabytes)) => Ok(RunTarget::Megabytes(megabytes)),
        }
    }
}
