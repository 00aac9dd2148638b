use log::info;
use std::time::Instant;
use trajaccel::{Accelerator, Driver, WaitPolicy};

fn main() {
    env_logger::init();

    let mut acc = Accelerator::default();
    let mut driver = Driver::new(&mut acc);

    // Random seeds can wrap into the 0 cycle, so every run gets a budget
    let policy = WaitPolicy::unbounded().with_max_cycles(100_000);
    let runs = 20_000;

    let start = Instant::now();
    let mut completed = 0u64;
    let mut timed_out = 0u64;
    let mut accumulator: u64 = 0;

    for _ in 0..runs {
        let seed = rand::random::<u32>();
        match driver.run(seed, &policy) {
            Ok(t) => {
                completed += 1;
                accumulator = accumulator.wrapping_add(t.orbit_len);
            }
            Err(e) => {
                info!("seed {:#010x}: {}", seed, e);
                timed_out += 1;
                driver.reset();
            }
        }
    }

    let duration = start.elapsed();
    let cycles = driver.accelerator().cycles;
    println!("Trajectory Accelerator Benchmark");
    println!("Runs: {} ({} completed, {} timed out)", runs, completed, timed_out);
    println!("Time: {:?}", duration);
    println!("Edges: {}", cycles);
    println!(
        "M Edges/sec: {:.2}",
        (cycles as f64 / duration.as_secs_f64()) / 1_000_000.0
    );
    println!("Accumulator: {}", accumulator);
}
