use clap::{App, Arg};
use fourier_engine::{Direction, Plan};
use num_complex::Complex;
use rand::{distributions::Standard, Rng};
use std::hint::black_box;
use std::time::Instant;

fn main() {
    let matches = App::new("fourier-engine-prof")
        .arg(Arg::with_name("size").takes_value(true).required(true))
        .arg(
            Arg::with_name("iterations")
                .short("n")
                .long("iterations")
                .takes_value(true)
                .default_value("100000"),
        )
        .arg(
            Arg::with_name("inverse")
                .long("inverse")
                .help("Profile the inverse transform"),
        )
        .arg(
            Arg::with_name("plan")
                .long("plan")
                .help("Profile plan construction instead of execution"),
        )
        .get_matches();

    let size = match matches.value_of("size").map(str::parse::<usize>) {
        Some(Ok(size)) => size,
        _ => {
            eprintln!("size must be a positive integer");
            std::process::exit(2);
        }
    };
    let iterations = match matches.value_of("iterations").map(str::parse::<usize>) {
        Some(Ok(iterations)) => iterations,
        _ => {
            eprintln!("iterations must be a non-negative integer");
            std::process::exit(2);
        }
    };
    let direction = Direction::from_inverse(matches.is_present("inverse"));

    let start = Instant::now();
    let plan = match Plan::<f32>::new(size, direction) {
        Ok(plan) => plan,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };
    println!("{:?} built in {:?}", plan, start.elapsed());

    let start = Instant::now();
    if matches.is_present("plan") {
        for _ in 0..iterations {
            black_box(Plan::<f32>::new(size, direction)).ok();
        }
    } else {
        let input = rand::thread_rng()
            .sample_iter(&Standard)
            .zip(rand::thread_rng().sample_iter(&Standard))
            .take(size)
            .map(|(x, y)| Complex::new(x, y))
            .collect::<Vec<Complex<f32>>>();
        let mut output = vec![Complex::default(); size];
        for _ in 0..iterations {
            if let Err(error) = plan.execute_in_place(black_box(&input), &mut output) {
                eprintln!("{}", error);
                std::process::exit(1);
            }
            black_box(&mut output);
        }
    }
    let elapsed = start.elapsed();
    println!(
        "{} iterations in {:?} ({:?} each)",
        iterations,
        elapsed,
        elapsed / iterations.max(1) as u32
    );
}
