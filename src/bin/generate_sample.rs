//! Writes `sample.arff` and `sample.csv` with a synthetic flower dataset
//! into the directory given as the first argument (default: current dir).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const ATTRIBUTES: [&str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];
const ROWS_PER_SPECIES: usize = 50;

/// (species, per-attribute mean, per-attribute std-dev)
const SPECIES: [(&str, [f64; 4], [f64; 4]); 3] = [
    ("setosa", [5.0, 3.4, 1.5, 0.25], [0.35, 0.38, 0.17, 0.1]),
    ("versicolor", [5.9, 2.8, 4.3, 1.3], [0.52, 0.31, 0.47, 0.2]),
    ("virginica", [6.6, 3.0, 5.6, 2.0], [0.64, 0.32, 0.55, 0.27]),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One generated row: four measurements and the species label.
fn generate_rows(rng: &mut SimpleRng) -> Vec<([f64; 4], &'static str)> {
    let mut rows = Vec::with_capacity(SPECIES.len() * ROWS_PER_SPECIES);
    for (species, means, std_devs) in &SPECIES {
        for _ in 0..ROWS_PER_SPECIES {
            let mut values = [0.0; 4];
            for (v, (mean, sd)) in values.iter_mut().zip(means.iter().zip(std_devs)) {
                // one decimal, never negative
                *v = (rng.gauss(*mean, *sd).max(0.1) * 10.0).round() / 10.0;
            }
            rows.push((values, *species));
        }
    }
    rows
}

fn write_arff(path: &Path, rows: &[([f64; 4], &str)]) -> Result<()> {
    let mut out = String::new();
    writeln!(out, "% Synthetic flower measurements")?;
    writeln!(out, "@relation flowers")?;
    writeln!(out)?;
    for name in ATTRIBUTES {
        writeln!(out, "@attribute {name} numeric")?;
    }
    let labels: Vec<&str> = SPECIES.iter().map(|(s, _, _)| *s).collect();
    writeln!(out, "@attribute species {{{}}}", labels.join(", "))?;
    writeln!(out)?;
    writeln!(out, "@data")?;
    for (values, species) in rows {
        let numbers: Vec<String> = values.iter().map(|v| format!("{v:.1}")).collect();
        writeln!(out, "{},{species}", numbers.join(","))?;
    }

    std::fs::write(path, out).with_context(|| format!("writing {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

fn write_csv(path: &Path, rows: &[([f64; 4], &str)]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    let mut header = ATTRIBUTES.to_vec();
    header.push("species");
    writer.write_record(&header)?;
    for (values, species) in rows {
        let mut record: Vec<String> = values.iter().map(|v| format!("{v:.1}")).collect();
        record.push(species.to_string());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    let arff_path = dir.join("sample.arff");
    write_arff(&arff_path, &rows)?;
    let csv_path = dir.join("sample.csv");
    write_csv(&csv_path, &rows)?;

    println!(
        "Wrote {} rows to {} and {}",
        rows.len(),
        arff_path.display(),
        csv_path.display()
    );
    Ok(())
}
