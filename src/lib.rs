//! distpair-kernel: deterministic counting of lattice point pairs separated
//! by a fixed Euclidean distance.

pub mod count;
pub mod error;
pub mod input;
pub mod offsets;
pub mod point;
pub mod store;

pub use count::{count_pairs, ordered_hits, summarize, CountSummary};
pub use error::{KernelError, Result};
pub use input::{load_points, read_points, LoadedPoints};
pub use offsets::{OffsetTable, DISTANCE};
pub use point::{Offset, Point};
pub use store::PointSet;
