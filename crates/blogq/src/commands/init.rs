//! Init command implementation.
//!
//! Writes the starter blog (one welcome post, one comment, two categories)
//! to the data file.

use blog_store_rs::{BlogData, PostStore};
use owo_colors::OwoColorize;
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Executes the init command.
///
/// # Errors
///
/// Returns an error if the data file already exists and `force` is not set,
/// or if the file cannot be written.
pub fn execute(ctx: &CommandContext, force: bool) -> Result<()> {
    let store = ctx.store()?;
    write_sample(&store, force)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "path": store.path().display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        let message = format!("Blog data written to {}", store.path().display());
        if ctx.use_colors {
            println!("{}", message.green());
        } else {
            println!("{message}");
        }
    }

    Ok(())
}

fn write_sample(store: &PostStore, force: bool) -> Result<()> {
    if store.exists() && !force {
        return Err(CommandError::Input(format!(
            "data file already exists at {} (use --force to overwrite)",
            store.path().display()
        )));
    }

    debug!(path = %store.path().display(), force, "writing starter data");
    store.save(&BlogData::sample())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_sample_creates_file() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::with_path(dir.path().join("nested").join("posts.json"));

        write_sample(&store, false).unwrap();
        assert_eq!(store.load().unwrap(), BlogData::sample());
    }

    #[test]
    fn test_write_sample_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::with_path(dir.path().join("posts.json"));
        store.save(&BlogData::default()).unwrap();

        let err = write_sample(&store, false).unwrap_err();
        assert!(matches!(err, CommandError::Input(_)));
        assert_eq!(store.load().unwrap(), BlogData::default());

        write_sample(&store, true).unwrap();
        assert_eq!(store.load().unwrap(), BlogData::sample());
    }
}
