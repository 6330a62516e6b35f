use std::env;
use std::fs;

/// Variables de `.env` que viajan al binario via `option_env!` (src/config.rs).
const CONFIG_KEYS: [&str; 3] = ["BACKEND_URL", "GOOGLE_CLIENT_ID", "ENABLE_LOGGING"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=Sin archivo .env; se usan los valores por defecto (ver .env.example)");
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
        let (key, value) = (key.trim(), value.trim());

        // Solo el allowlist, y el entorno del proceso tiene prioridad
        if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
