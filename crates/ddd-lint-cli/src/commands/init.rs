//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

use crate::settings_file::SETTINGS_FILE_NAMES;

const CONFIG_TEMPLATE: &str = r#"# ddd-lint settings
# Every key is optional; the values below are the defaults.

[analyzer]
# Composer descriptor; the first autoload.psr-4 namespace is the project root.
descriptor = "composer.json"

# Directory whose files are classified and checked.
source_dir = "src"

# Extension of files to check.
extension = "php"

# Leading namespace segments forming the project root (vendor + project).
root_segments = 2

# Glob patterns to skip, relative to source_dir.
exclude = []
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_template(Path::new(SETTINGS_FILE_NAMES[0]), force)?;

    println!("Created {}", SETTINGS_FILE_NAMES[0]);
    println!();
    println!("Next steps:");
    println!("  1. Adjust [analyzer] if your layout differs from a Composer default");
    println!("  2. Run: ddd-lint check");

    Ok(())
}

fn write_template(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)?;
    Ok(())
}
