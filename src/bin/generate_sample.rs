//! Writes a demo `assets/managers_profit_ayp.csv` with the raw 10-column
//! layout the viewer expects: row index, registry ID, name, and seven
//! numeric performance columns.

use anyhow::{Context, Result};

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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
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

const OUT_PATH: &str = "assets/managers_profit_ayp.csv";
const MANAGERS: usize = 280;

const SURNAMES: [&str; 12] = [
    "张", "王", "李", "赵", "刘", "陈", "杨", "黄", "周", "吴", "徐", "孙",
];
const GIVEN: [&str; 14] = [
    "伟", "静", "磊", "洋", "勇", "娟", "涛", "明", "超", "华", "平", "辉", "鑫", "蕾",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("assets").context("creating assets directory")?;
    let mut writer = csv::Writer::from_path(OUT_PATH)
        .with_context(|| format!("creating {OUT_PATH}"))?;
    writer.write_record([
        "SN",
        "registry_id",
        "name",
        "total_aum_100m",
        "career_years",
        "avg_tenure_years",
        "attendance",
        "avg_annualized",
        "weighted_avg_annualized",
        "worst_return",
    ])?;

    for i in 0..MANAGERS {
        let registry_id = format!("{}", 21_000_000 + i as u64 * 13 + rng.next_u64() % 9);
        let mut name = rng.pick(&SURNAMES).to_string();
        name.push_str(rng.pick(&GIVEN));
        if rng.next_f64() < 0.6 {
            name.push_str(rng.pick(&GIVEN));
        }

        let career_years = rng.uniform(1.0, 22.0);
        // one manager with no active tenure on record, the loader warns on it
        let attendance = if i == 137 { 0.0 } else { rng.uniform(0.55, 1.0) };
        let avg_tenure_years = career_years * rng.uniform(0.3, 0.9);
        let total_aum = rng.gauss(40.0, 30.0).abs().max(0.5);
        let avg_return = rng.gauss(0.05, 0.04);
        let weighted_avg_return = avg_return + rng.gauss(0.005, 0.01);
        let worst_return = -rng.gauss(0.15, 0.08).abs();

        writer.write_record([
            i.to_string(),
            registry_id,
            name,
            format!("{total_aum:.4}"),
            format!("{career_years:.4}"),
            format!("{avg_tenure_years:.4}"),
            format!("{attendance:.4}"),
            format!("{avg_return:.4}"),
            format!("{weighted_avg_return:.4}"),
            format!("{worst_return:.4}"),
        ])?;
    }

    writer.flush()?;
    println!("wrote {MANAGERS} managers to {OUT_PATH}");
    Ok(())
}
