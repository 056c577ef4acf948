use std::io::{self, BufWriter, Read, Write};
use std::process;

use log::{debug, info};
use segment_savings::{max_savings, parse_test_cases, Result};

fn run() -> Result<()> {
    let mut text = String::new();
    io::stdin().lock().read_to_string(&mut text)?;

    let cases = parse_test_cases(&text)?;
    info!("solving {} test cases", cases.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for case in &cases {
        writeln!(out, "{}", max_savings(&case.values))?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        debug!("{:?}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
