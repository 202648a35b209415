use std::env;
use std::fs;
use std::path::Path;

/// Keys read with `option_env!` in `src/config.rs`
const BASE_URL_KEYS: [&str; 3] = [
    "REACT_APP_API_BASE",
    "REACT_APP_BACKEND_URL",
    "REACT_APP_API_BASE_URL",
];

fn main() {
    for key in BASE_URL_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");

    // Optional .env; real environment variables take precedence over it
    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Could not read .env, using defaults");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');
        if key.starts_with("REACT_APP_") && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
