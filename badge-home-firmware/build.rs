//! Build script for badge-home-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates home.toml and embeds it as postcard binary
//! - Embeds the QR image (an empty blob when the file is absent)

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use badge_home_core::config::HomeConfig;

/// QR image source, relative to the crate root
const QR_IMAGE: &str = "assets/github_qr.bmp";

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    setup_linker(&out_dir);
    embed_config(&out_dir);
    embed_assets(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse, validate and serialize home.toml
fn embed_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=home.toml");

    let config_path = Path::new("home.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: home.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a home.toml configuration file.           ║\n\
            ║  Please create one in the badge-home-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read home.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Oversized strings fail here: heapless refuses them during deserialization
    let config: HomeConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            let message = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid home.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                message
                    .lines()
                    .map(|line| format!("║  {:<64} ║", line))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid home screen configuration                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("{:?}", e)
        );
    }

    let blob = postcard::to_allocvec(&config).unwrap();
    fs::write(out_dir.join("home.cfg"), blob).unwrap();
}

/// Copy the QR image into OUT_DIR
///
/// A missing source file is written as an empty blob; the firmware then
/// shows the missing-image message.
fn embed_assets(out_dir: &Path) {
    println!("cargo:rerun-if-changed={}", QR_IMAGE);

    let source = Path::new(QR_IMAGE);
    let target = out_dir.join("github_qr.bmp");

    if source.exists() {
        fs::copy(source, &target).unwrap();
    } else {
        println!("cargo:warning={} not found, building without a QR image", QR_IMAGE);
        fs::write(&target, []).unwrap();
    }
}
