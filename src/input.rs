use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{KernelError, Result};
use crate::point::Point;
use crate::store::PointSet;

/// Outcome of parsing one input source.
#[derive(Debug)]
pub struct LoadedPoints {
    pub set: PointSet,
    /// Point count the header token declared.
    pub declared: u64,
    /// Exact duplicates collapsed by the set.
    pub duplicates: u64,
}

/// Parse `N x1 y1 ... xN yN` from whitespace-delimited tokens.
///
/// Newlines and spaces are interchangeable. Tokens beyond the N declared
/// pairs are ignored; fewer tokens than declared is an error.
pub fn read_points<R: Read>(mut reader: R) -> Result<LoadedPoints> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let declared = match tokens.next() {
        Some(token) => token
            .parse::<u64>()
            .map_err(|_| KernelError::InvalidCount(token.to_string()))?,
        None => return Err(KernelError::MissingCount),
    };

    let mut set = PointSet::new();
    let mut duplicates = 0u64;

    for parsed in 0..declared {
        let x = next_coordinate(&mut tokens, declared, parsed)?;
        let y = next_coordinate(&mut tokens, declared, parsed)?;
        if !set.insert(Point::new(x, y)) {
            duplicates += 1;
        }
    }

    Ok(LoadedPoints {
        set,
        declared,
        duplicates,
    })
}

/// Open and parse an input file, failing fast when it cannot be opened.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<LoadedPoints> {
    let file = File::open(path)?;
    read_points(BufReader::new(file))
}

fn next_coordinate<'a, I>(tokens: &mut I, expected: u64, found: u64) -> Result<i64>
where
    I: Iterator<Item = &'a str>,
{
    match tokens.next() {
        Some(token) => token
            .parse::<i64>()
            .map_err(|_| KernelError::InvalidCoordinate(token.to_string())),
        None => Err(KernelError::TruncatedInput { expected, found }),
    }
}
