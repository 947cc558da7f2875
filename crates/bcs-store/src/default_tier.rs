//! Default tier link - `BASH-CODING-STANDARD.md` points at one consolidated tier

use crate::config::IndexConfig;
use crate::error::IndexError;
use bcs_domain::Tier;
use std::fs;
use std::path::PathBuf;

/// Read which tier the default link currently points at
///
/// Returns `Ok(None)` when the link does not exist.
pub fn read_default_tier(config: &IndexConfig) -> Result<Option<Tier>, IndexError> {
    let link = config.root.join(config.default_link_name());
    let meta = match fs::symlink_metadata(&link) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if !meta.file_type().is_symlink() {
        return Err(IndexError::DefaultTier(format!(
            "{} is not a symlink",
            link.display()
        )));
    }

    let target = fs::read_link(&link)?;
    let name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| IndexError::DefaultTier(format!("unreadable link target for {}", link.display())))?;

    Tier::ALL
        .into_iter()
        .find(|tier| name == config.consolidated_name(*tier))
        .map(Some)
        .ok_or_else(|| {
            IndexError::DefaultTier(format!("link target '{}' is not a tier document", name))
        })
}

/// Point the default link at the consolidated document for `tier`
///
/// Refuses to replace a regular file and requires the target document to exist.
pub fn set_default_tier(config: &IndexConfig, tier: Tier) -> Result<PathBuf, IndexError> {
    let target_name = config.consolidated_name(tier);
    let target = config.root.join(&target_name);
    if !target.is_file() {
        return Err(IndexError::DefaultTier(format!(
            "{} does not exist",
            target.display()
        )));
    }

    let link = config.root.join(config.default_link_name());
    match fs::symlink_metadata(&link) {
        Ok(meta) if meta.file_type().is_symlink() => fs::remove_file(&link)?,
        Ok(_) => {
            return Err(IndexError::DefaultTier(format!(
                "{} exists and is not a symlink",
                link.display()
            )))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    create_link(&target_name, &link)?;
    tracing::info!("Default tier set to {} ({})", tier, link.display());
    Ok(link)
}

#[cfg(unix)]
fn create_link(target_name: &str, link: &std::path::Path) -> Result<(), IndexError> {
    std::os::unix::fs::symlink(target_name, link)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_link(_target_name: &str, _link: &std::path::Path) -> Result<(), IndexError> {
    Err(IndexError::DefaultTier(
        "symlinks are only supported on Unix".to_string(),
    ))
}
