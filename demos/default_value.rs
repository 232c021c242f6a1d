use result_rail::{Failure, Outcome, Success};

fn get_config(key: &str) -> Outcome<String, String> {
    if key == "host" {
        return Success("localhost".to_string());
    }
    Failure(format!("config {key} not found"))
}

fn main() {
    println!("Running default value examples...");

    // 1. Present key returns the stored value
    println!("\n1. Present key:");
    let host = get_config("host").unwrap_or("fallback".to_string());
    println!("host = {host}");

    // 2. Missing key falls back to the default
    println!("\n2. Missing key:");
    let port = get_config("port").unwrap_or("default_value".to_string());
    println!("port = {port}");

    // 3. Computing the fallback from the error itself
    println!("\n3. Computed fallback:");
    let region = get_config("region").unwrap_or_else(|error| format!("<{error}>"));
    println!("region = {region}");
}
