use crate::utils::error::Result;

/// Raw byte access to named data files. Implementations know nothing about
/// JSON or business rules.
pub trait Storage: Send + Sync {
    /// `Ok(None)` when the file does not exist.
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the whole file, creating it (and its parents) if needed.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

