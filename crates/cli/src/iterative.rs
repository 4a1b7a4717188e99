use eyre::Result;
use log::debug;
use tinyfib::fibonacci;

/// Position to compute. Edit to try other positions.
const N: i32 = 10;

fn main() -> Result<()> {
    pretty_env_logger::init();

    debug!("computing fibonacci({}) with the iterative strategy", N);
    let value = fibonacci(N)?;
    println!("Fibonacci number at position {} is {}", N, value);

    Ok(())
}
