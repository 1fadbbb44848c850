use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hint::black_box;
use std::time::{Duration, Instant};

use qrgen::{ECLevel, QRBuilder};

const ITERATIONS: u32 = 20;

fn print_table<N>(result: &HashMap<String, HashMap<String, N>>, rows: &[&str], columns: &[&str])
where
    N: Display + Debug + Default,
{
    let cell_w = 15;
    let df = N::default();
    let divider = "-".repeat(columns.len() * (cell_w + 2) + 1);

    println!("{divider}");
    let mut header = String::from("| ");
    for c in columns {
        header.push_str(&format!("{c:<cell_w$}| "));
    }
    println!("{header}");
    println!("{divider}");

    for hr in rows {
        let Some(r) = result.get(&hr.to_string()) else { continue };
        let mut row = format!("| {hr:<cell_w$}| ");

        for c in columns.iter().skip(1) {
            let cell = r.get(&c.to_string()).unwrap_or(&df);
            row.push_str(&format!("{:<cell_w$.2}| ", cell));
        }

        println!("{row}");
    }

    println!("{divider}");
}

// Mean build time in milliseconds
fn time_build(data: &str, min_version: usize, ecl: ECLevel) -> f64 {
    let mut total = Duration::ZERO;
    for _ in 0..ITERATIONS {
        let start = Instant::now();
        let qr = QRBuilder::new(data).min_version(min_version).ec_level(ecl).build();
        total += start.elapsed();
        black_box(qr.expect("Benchmark input should fit"));
    }
    total.as_secs_f64() * 1000.0 / ITERATIONS as f64
}

fn main() {
    println!("Running qrgen encoding benchmark ({ITERATIONS} builds per cell)\n");

    let inputs = [
        ("Numeric", "8675309".repeat(40)),
        ("Alphanumeric", "HELLO WORLD ".repeat(20)),
        ("Byte", "Hello, world! ".repeat(15)),
        ("Kanji", "点茗亜".repeat(20)),
    ];
    let versions = [1, 10, 20, 30, 40];
    let levels = [("L", ECLevel::L), ("M", ECLevel::M), ("Q", ECLevel::Q), ("H", ECLevel::H)];

    for (name, data) in inputs.iter() {
        let mut result: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for v in versions {
            let row = result.entry(format!("v{v}")).or_default();
            for (lvl, ecl) in levels {
                row.insert(lvl.to_string(), time_build(data, v, ecl));
            }
        }

        println!("{name} ({} chars), mean build time in ms", data.chars().count());
        let rows = versions.iter().map(|v| format!("v{v}")).collect::<Vec<_>>();
        let rows = rows.iter().map(String::as_str).collect::<Vec<_>>();
        print_table(&result, &rows, &["Min version", "L", "M", "Q", "H"]);
        println!();
    }
}
