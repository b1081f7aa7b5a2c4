//! Writes a synthetic `parsed_data.csv` for trying out the dashboard.

use anyhow::{Context, Result};

// Same column list the dashboard loads.
#[allow(dead_code)]
#[path = "../data/schema.rs"]
mod schema;

use schema::COLUMNS;

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let cells = ["HeLa", "HEK293", "Jurkat"];
    let enzymes: [(&str, f64); 2] = [("ProtK", 1.0), ("Lysozyme", 1.6)];
    let lysis_temps: [(u32, f64); 2] = [(65, 1.3), (95, 1.0)];
    let targets = ["1", "10", "100"];
    let buffers = ["TE", "PBS"];
    let people = ["AB", "CD", "EF"];

    let output_path = "parsed_data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(COLUMNS)?;

    let mut rows = 0usize;
    for (run, &cell) in cells.iter().enumerate() {
        for &(enzyme, enzyme_factor) in &enzymes {
            for &(lysis_temp, temp_factor) in &lysis_temps {
                for target in targets {
                    let lod = (2.0 * enzyme_factor * temp_factor + rng.gauss(0.0, 0.3)).max(0.1);
                    let ct = 20.0 + 3.3 * lod.log2() + rng.gauss(0.0, 0.5);
                    // Every so often a failed run has no LOD
                    let lod_text = if rng.next_f64() < 0.08 {
                        "NA".to_string()
                    } else {
                        format!("{lod:.2}")
                    };
                    let mm = if rng.next_f64() < 0.5 { "1" } else { "2" };
                    let record = [
                        lod_text,
                        format!("{ct:.2}"),
                        target.to_string(),
                        rng.pick(&["96-well", "384-well"]).to_string(),
                        mm.to_string(),
                        cell.to_string(),
                        rng.pick(&["0.5", "1"]).to_string(),
                        enzyme.to_string(),
                        rng.pick(&buffers).to_string(),
                        lysis_temp.to_string(),
                        rng.pick(&["10", "20"]).to_string(),
                        "95".to_string(),
                        "5".to_string(),
                        rng.pick(&people).to_string(),
                        format!("2023-03-{:02}", run + 1),
                        format!("run_{}.csv", run + 1),
                        rng.pick(&["Yes", "No"]).to_string(),
                        String::new(),
                    ];
                    writer.write_record(&record)?;
                    rows += 1;
                }
            }
        }

        // Reaction-input controls are excluded by the dashboard on load
        let control = [
            "NA", "18.00", "RXN Input", "96-well", "2", cell, "1", "ProtK", "TE", "95", "10",
            "95", "5", "AB", "2023-03-01", "controls.csv", "Yes", "input control",
        ];
        writer.write_record(control)?;
        rows += 1;
    }
    writer.flush()?;

    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
