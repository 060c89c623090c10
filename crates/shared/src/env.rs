use std::path::PathBuf;

use tracing::{debug, trace};

/// Look for `file_name` in the current directory, then at the
/// workspace root (two levels up, for `cargo run -p` from a crate dir).
fn find_env_file(file_name: &str) -> Option<PathBuf> {
    let local = PathBuf::from(file_name);
    if local.exists() {
        return Some(local);
    }

    let workspace_root = PathBuf::from("../../").join(file_name);
    if workspace_root.exists() {
        return Some(workspace_root);
    }

    trace!("No {file_name} found in current directory or workspace root");
    None
}

fn load_env_file(file_name: &str) {
    if let Some(path) = find_env_file(file_name) {
        match dotenv::from_filename(&path) {
            Ok(_) => debug!("Loaded environment variables from: {}", path.display()),
            Err(e) => debug!("Skipping {}: {}", path.display(), e),
        }
    }
}

/// Load `.env` and `.env.secrets` if present. Missing files are fine;
/// the process environment always wins over file contents.
pub fn configure_env() -> Result<(), anyhow::Error> {
    load_env_file(".env");
    load_env_file(".env.secrets");
    Ok(())
}
