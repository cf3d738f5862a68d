use anyhow::Context;

/// Minimal deterministic PRNG (splitmix64)
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() -> anyhow::Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/resale-flat-prices.csv".to_string());

    let towns: [(&str, f64); 4] = [
        ("PUNGGOL", 1.0),
        ("BEDOK", 0.92),
        ("TAMPINES", 0.97),
        ("YISHUN", 0.88),
    ];
    let flat_types: [(&str, f64); 4] = [
        ("3 ROOM", 350_000.0),
        ("4 ROOM", 450_000.0),
        ("5 ROOM", 550_000.0),
        ("EXECUTIVE", 650_000.0),
    ];
    let streets = ["DR", "AVE 3", "ST 21", "CENTRAL"];

    let mut rng = SampleRng::new(42);

    if let Some(parent) = std::path::Path::new(&output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "month",
        "town",
        "flat_type",
        "block",
        "street_name",
        "resale_price",
    ])?;

    let mut row_count: u64 = 0;
    for &(town, town_factor) in &towns {
        for &(flat_type, base_price) in &flat_types {
            for year in 2017..=2024 {
                for month in 1..=12 {
                    // Thin the grid so not every month transacts.
                    if rng.next_f64() < 0.35 {
                        continue;
                    }

                    let appreciation = 1.0 + 0.04 * (year - 2017) as f64;
                    let noise = 1.0 + (rng.next_f64() - 0.5) * 0.16;
                    let price = base_price * town_factor * appreciation * noise;
                    let price = (price / 1000.0).round() * 1000.0;

                    let month_field = if rng.next_f64() < 0.004 {
                        String::new()
                    } else {
                        format!("{year}-{month:02}")
                    };
                    let price_field = if rng.next_f64() < 0.004 {
                        String::new()
                    } else {
                        format!("{price:.0}")
                    };

                    let block = format!("{}", 100 + rng.next_u64() % 600);
                    let street = format!("{} {}", town, streets[(rng.next_u64() % 4) as usize]);

                    writer.write_record([
                        month_field.as_str(),
                        town,
                        flat_type,
                        block.as_str(),
                        street.as_str(),
                        price_field.as_str(),
                    ])?;
                    row_count += 1;
                }
            }
        }
    }

    writer.flush()?;
    println!("Wrote {row_count} transactions to {output_path}");
    Ok(())
}
