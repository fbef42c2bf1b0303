//! Export port definition.

use std::path::{Path, PathBuf};

use crate::domain::entities::Transaction;
use crate::domain::errors::ExportError;

/// Port for writing the displayed transactions to a file.
#[cfg_attr(test, mockall::automock)]
pub trait ExportPort: Send + Sync {
    /// Writes the transactions to `destination` and returns the written path.
    fn export(
        &self,
        transactions: &[Transaction],
        destination: &Path,
    ) -> Result<PathBuf, ExportError>;
}
