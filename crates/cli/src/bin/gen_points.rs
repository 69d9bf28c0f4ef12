//! Deterministic dataset generator: scatters noise points and plants pairs
//! at the exact target distance. Useful for demos and manual benchmarking.

use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use distpair_kernel::{Offset, OffsetTable, Point, PointSet, DISTANCE};

#[derive(Parser)]
#[command(name = "gen-points")]
#[command(about = "Generates a distpair input file with planted pairs", long_about = None)]
struct Args {
    /// Output file.
    #[arg(long, default_value = "points.txt")]
    out: PathBuf,

    /// Noise points to scatter.
    #[arg(long, default_value_t = 1_000)]
    noise: u64,

    /// Pairs to plant at the exact distance.
    #[arg(long, default_value_t = 10)]
    pairs: u64,

    /// Coordinate range: points land in [-range, range] on each axis.
    #[arg(long, default_value_t = 1_000_000)]
    range: i64,

    /// PRNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Splitmix-style generator: reproducible across runs and platforms.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn coord(&mut self, range: i64) -> i64 {
        (self.next() % (2 * range as u64 + 1)) as i64 - range
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.range <= 0 {
        anyhow::bail!("range must be positive");
    }

    let mut rng = Rng(args.seed);
    let offsets: Vec<Offset> = OffsetTable::new().iter().copied().collect();
    let mut set = PointSet::new();

    let mut planted = 0u64;
    while planted < args.pairs {
        let base = Point::new(rng.coord(args.range), rng.coord(args.range));
        let offset = offsets[(rng.next() as usize) % offsets.len()];
        let mate = match base.translate(offset) {
            Some(mate) => mate,
            None => continue,
        };
        let base_new = set.insert(base);
        let mate_new = set.insert(mate);
        if base_new && mate_new {
            planted += 1;
        }
    }

    let mut scattered = 0u64;
    let mut misses = 0u64;
    while scattered < args.noise {
        let point = Point::new(rng.coord(args.range), rng.coord(args.range));
        if set.insert(point) {
            scattered += 1;
            misses = 0;
        } else {
            misses += 1;
            if misses > 1_000_000 {
                anyhow::bail!("range {} is too small for {} noise points", args.range, args.noise);
            }
        }
    }

    let mut body = String::new();
    writeln!(body, "{}", set.len())?;
    for point in set.iter() {
        writeln!(body, "{} {}", point.x, point.y)?;
    }
    fs::write(&args.out, body)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    println!("Wrote {} points to {}", set.len(), args.out.display());
    println!(
        "Planted {} pairs at distance {} (random noise can add more)",
        planted, DISTANCE
    );

    Ok(())
}
