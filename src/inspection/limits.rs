use crate::error::{ScanError, ScanErrorKind, ScanResult};
use crate::inspection::config::ScanConfig;
use crate::parser::JsonSource;

/// Check the source size before attempting to read or decode it.
/// This avoids loading very large files into memory if the user-configured
/// limit is smaller than the file.
pub fn check_source_size_before_read(source: &JsonSource, config: &ScanConfig) -> ScanResult<()> {
    if let Some(size) = source.estimated_size() {
        check_size(size as usize, config)?;
    }
    Ok(())
}

/// Check the size of content that has already been read
pub fn check_content_size(content: &str, config: &ScanConfig) -> ScanResult<()> {
    check_size(content.len(), config)
}

fn check_size(size: usize, config: &ScanConfig) -> ScanResult<()> {
    if size > config.memory_limit {
        return Err(ScanError::scan(ScanErrorKind::InputTooLarge {
            size,
            limit: config.memory_limit,
        }));
    }
    Ok(())
}
