use std::{env, error::Error, fs, path::Path};

#[path = "src/constants.rs"]
mod constants;

#[path = "src/raw_config.rs"]
mod raw_config;

use raw_config::{RawConfig, CONFIG_FILE, ENV_KEYS, EXAMPLE_CONFIG_FILE};

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if either toml changes
    println!("cargo:rerun-if-changed={}", CONFIG_FILE);
    println!("cargo:rerun-if-changed={}", EXAMPLE_CONFIG_FILE);
    println!("cargo:rerun-if-changed=src/constants.rs");
    println!("cargo:rerun-if-changed=src/raw_config.rs");
    for key in ENV_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let path = raw_config::config_path(Path::new(CONFIG_FILE).exists());
    if path == EXAMPLE_CONFIG_FILE {
        println!(
            "cargo:warning={} not found, using placeholders from {}",
            CONFIG_FILE, EXAMPLE_CONFIG_FILE
        );
    }

    // Read, parse and apply env overrides
    let toml_str = fs::read_to_string(path)?;
    let raw = RawConfig::parse(&toml_str, |key| env::var(key).ok())?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, raw.to_rust())?;
    Ok(())
}
