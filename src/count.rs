use crate::offsets::OffsetTable;
use crate::store::PointSet;

/// Totals from one counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSummary {
    pub points: usize,
    pub offsets: usize,
    pub ordered_hits: u64,
    pub pairs: u64,
}

/// Count ordered (point, offset) hits: shifts that land on a stored point.
///
/// Each unordered pair is seen exactly twice, once from each endpoint,
/// because the table contains every offset's negation.
pub fn ordered_hits(points: &PointSet, offsets: &OffsetTable) -> u64 {
    let mut hits = 0u64;
    for point in points.iter() {
        for offset in offsets.iter() {
            if let Some(neighbor) = point.translate(*offset) {
                if points.contains(&neighbor) {
                    hits += 1;
                }
            }
        }
    }
    hits
}

/// Distinct unordered pairs separated by exactly the table's distance.
pub fn count_pairs(points: &PointSet, offsets: &OffsetTable) -> u64 {
    ordered_hits(points, offsets) / 2
}

pub fn summarize(points: &PointSet, offsets: &OffsetTable) -> CountSummary {
    let hits = ordered_hits(points, offsets);
    CountSummary {
        points: points.len(),
        offsets: offsets.len(),
        ordered_hits: hits,
        pairs: hits / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn set_of(points: &[(i64, i64)]) -> PointSet {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_empty_set_counts_zero() {
        let table = OffsetTable::new();
        assert_eq!(count_pairs(&set_of(&[]), &table), 0);
    }

    #[test]
    fn test_single_point_never_pairs_with_itself() {
        let table = OffsetTable::new();
        assert_eq!(count_pairs(&set_of(&[(42, 42)]), &table), 0);
    }

    #[test]
    fn test_axis_aligned_pair() {
        let table = OffsetTable::new();
        let points = set_of(&[(0, 0), (1234, 0)]);
        assert_eq!(ordered_hits(&points, &table), 2);
        assert_eq!(count_pairs(&points, &table), 1);
    }

    #[test]
    fn test_non_axis_pair() {
        // 210² + 1216² = 1234²
        let table = OffsetTable::new();
        let points = set_of(&[(5, 5), (215, 1221)]);
        assert_eq!(count_pairs(&points, &table), 1);
    }

    #[test]
    fn test_near_miss_counts_zero() {
        let table = OffsetTable::new();
        assert_eq!(count_pairs(&set_of(&[(0, 0), (1, 1)]), &table), 0);
        assert_eq!(count_pairs(&set_of(&[(0, 0), (1233, 0)]), &table), 0);
        assert_eq!(count_pairs(&set_of(&[(0, 0), (210, 1217)]), &table), 0);
    }

    #[test]
    fn test_two_pairs_among_three_points() {
        // (0,0)-(1234,0) and (0,0)-(0,1234) match; the hypotenuse does not.
        let table = OffsetTable::new();
        let points = set_of(&[(0, 0), (1234, 0), (0, 1234)]);
        assert_eq!(count_pairs(&points, &table), 2);
    }

    #[test]
    fn test_summary_totals() {
        let table = OffsetTable::new();
        let points = set_of(&[(0, 0), (1234, 0), (0, 1234)]);
        let summary = summarize(&points, &table);
        assert_eq!(summary.points, 3);
        assert_eq!(summary.offsets, 12);
        assert_eq!(summary.ordered_hits, 4);
        assert_eq!(summary.pairs, 2);
    }

    #[test]
    fn test_counts_match_brute_force() {
        let table = OffsetTable::new();
        let coords = [
            (0, 0),
            (1234, 0),
            (0, 1234),
            (210, 1216),
            (-1216, 210),
            (17, -3),
            (1251, -3),
        ];
        let points = set_of(&coords);

        let mut expected = 0;
        for (i, a) in coords.iter().enumerate() {
            for b in coords.iter().skip(i + 1) {
                let pa = Point::new(a.0, a.1);
                let pb = Point::new(b.0, b.1);
                if pa.distance_squared(&pb) == (1234 * 1234) as i128 {
                    expected += 1;
                }
            }
        }

        assert_eq!(count_pairs(&points, &table), expected);
    }

    #[test]
    fn test_pairs_near_lattice_edge() {
        // A neighbor beyond i64::MAX is skipped, not wrapped into a false hit.
        let table = OffsetTable::new();
        let points = set_of(&[(i64::MAX - 10, 0), (i64::MAX - 10, 1234)]);
        assert_eq!(count_pairs(&points, &table), 1);
    }
}
