use result_rail::{boundary, question, Failure, Outcome, Success};

fn read_raw(source: &str) -> Outcome<String, String> {
    if source == "sensor" {
        return Success("41.9".to_string());
    }
    Failure(format!("source {source} offline"))
}

fn parse_reading(raw: &str) -> Outcome<f64, String> {
    Outcome::from_result(raw.parse::<f64>()).map_err(|e| e.to_string())
}

fn sensor_celsius(source: &str) -> Outcome<f64, String> {
    let raw = question!(read_raw(source));
    let value = question!(parse_reading(&raw));
    Success(value)
}

fn main() -> Outcome<(), String> {
    println!("Running propagation examples...");

    // 1. Failures travel up through question! unchanged
    println!("\n1. Propagation:");
    match sensor_celsius("backup") {
        Success(value) => println!("backup reads {value} C"),
        Failure(error) => println!("backup failed: {error}"),
    }

    // 2. boundary! keeps a failure local so this function can recover
    println!("\n2. Recovery at a boundary:");
    let reading = boundary! {
        let value = question!(sensor_celsius("backup"));
        Success(value)
    }
    .unwrap_or(f64::NAN);
    println!("backup with fallback: {reading}");

    // 3. question! works in main, since an Outcome can terminate the process
    println!("\n3. Propagating from main:");
    let value = question!(sensor_celsius("sensor"));
    println!("sensor reads {value} C");

    Success(())
}
