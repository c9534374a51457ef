//! Layered Error Example
//!
//! Demonstrates using ValueOrError as a "fork and re-shape" step between layers:
//! - Storage errors lifted into service errors with map_err
//! - Service outcomes rendered into responses with transform
//! - Side effects on exactly one branch with run
//! - Checked accessors and the WrongVariantAccess contract error
//!
//! Run with: cargo run --example layered_errors

use value_or_error::{ValueOrError, WrongVariantAccess};

#[derive(Debug)]
enum StorageError {
    NotFound(String),
    Corrupted { path: String, offset: u64 },
}

#[derive(Debug)]
#[allow(dead_code)]
enum ConfigError {
    Missing(String),
    Unreadable(String),
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Config {
    name: String,
    workers: u16,
}

fn read_file(path: &str) -> ValueOrError<String, StorageError> {
    match path {
        "app.toml" => ValueOrError::success("name=demo\nworkers=4".to_string()),
        "broken.toml" => ValueOrError::failure(StorageError::Corrupted {
            path: path.to_string(),
            offset: 17,
        }),
        _ => ValueOrError::failure(StorageError::NotFound(path.to_string())),
    }
}

fn parse(raw: &str) -> Config {
    let mut config = Config {
        name: String::new(),
        workers: 1,
    };
    for line in raw.lines() {
        if let Some(name) = line.strip_prefix("name=") {
            config.name = name.to_string();
        } else if let Some(workers) = line.strip_prefix("workers=") {
            config.workers = workers.parse().unwrap_or(1);
        }
    }
    config
}

fn load_config(path: &str) -> ValueOrError<Config, ConfigError> {
    read_file(path).transform(
        |raw| parse(&raw),
        |err| match err {
            StorageError::NotFound(p) => ConfigError::Missing(p),
            StorageError::Corrupted { path, offset } => {
                ConfigError::Unreadable(format!("{} at byte {}", path, offset))
            }
        },
    )
}

fn main() {
    println!("Layered Error Examples");
    println!("======================\n");

    // Example 1: transform lifts both sides at once
    println!("Example 1: Loading configs");
    println!("--------------------------");
    for path in ["app.toml", "missing.toml", "broken.toml"] {
        load_config(path).run(
            |config| println!("  {}: loaded {:?}", path, config),
            |err| println!("  {}: failed with {:?}", path, err),
        );
    }

    // Example 2: the error branch never turns into a success
    println!("\nExample 2: Exit codes");
    println!("---------------------");
    for path in ["app.toml", "missing.toml"] {
        let exit = load_config(path).transform(|_| 0, |_| 2);
        println!(
            "  {}: exit code {} (success: {})",
            path,
            exit.fold(|c| c, |c| c),
            load_config(path).is_success()
        );
    }

    // Example 3: checked accessors report the wrong variant instead of a default
    println!("\nExample 3: Checked accessors");
    println!("----------------------------");
    let missing = load_config("missing.toml");
    let access: Result<&Config, WrongVariantAccess> = missing.value();
    match access {
        Ok(config) => println!("  workers = {}", config.workers),
        Err(e) => println!("  {}", e),
    }

    // Example 4: interop with ? through std Result
    println!("\nExample 4: Interop with std Result");
    println!("----------------------------------");
    fn workers(path: &str) -> Result<u16, ConfigError> {
        let config = load_config(path).into_result()?;
        Ok(config.workers)
    }
    println!("  app.toml workers: {:?}", workers("app.toml"));
    println!("  missing.toml workers: {:?}", workers("missing.toml"));
}
