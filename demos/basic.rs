use result_rail::{Failure, Outcome, Success};

fn divide(a: f64, b: f64) -> Outcome<f64, String> {
    if b == 0.0 {
        return Failure("division by zero".to_string());
    }
    Success(a / b)
}

fn main() {
    println!("Running basic Outcome examples...");

    // 1. Success path
    println!("\n1. Success:");
    let quotient = divide(10.0, 2.0);
    if quotient.is_ok() {
        println!("10 / 2 = {}", quotient.unwrap());
    }

    // 2. Failure path
    println!("\n2. Failure:");
    let broken = divide(10.0, 0.0);
    if broken.is_err() {
        println!("10 / 0 failed: {}", broken.unwrap_err());
    }

    // 3. Matching instead of testing
    println!("\n3. Matching:");
    match divide(9.0, 3.0) {
        Success(value) => println!("9 / 3 = {value}"),
        Failure(error) => println!("9 / 3 failed: {error}"),
    }

    // Extracting the wrong variant panics; uncomment to see the message.
    // divide(10.0, 0.0).unwrap();
}
