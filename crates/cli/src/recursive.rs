use eyre::Result;
use log::debug;
use tinyfib::fibonacci_recursive;

/// Position to compute. Edit to try other positions.
const N: i32 = 10;

fn main() -> Result<()> {
    pretty_env_logger::init();

    debug!("computing fibonacci({}) with the recursive strategy", N);
    let value = fibonacci_recursive(N)?;
    println!("Fibonacci number at position {} is {}", N, value);

    Ok(())
}
