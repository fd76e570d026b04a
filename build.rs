use std::env;
use std::fs;
use std::path::Path;

// Variables que lee `JfastConfig::from_env()` vía option_env!
const CONFIG_KEYS: [&str; 5] = [
    "JFAST_DEFAULT_DURATION_MS",
    "JFAST_FRAME_FALLBACK_MS",
    "JFAST_SLIDE_LAYOUT_DELAY_MS",
    "JFAST_ENABLE_LOGGING",
    "JFAST_LOG_LEVEL",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=.env: variable desconocida '{}' ignorada", key);
                        continue;
                    }

                    // Solo configurar si no está ya definida
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
