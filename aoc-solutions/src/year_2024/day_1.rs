//! Day 1: Historian Hysteria
//!
//! Two columns of location IDs. Part 1 pairs them up smallest-to-smallest
//! and sums the distances; part 2 weighs each left ID by how often it
//! appears on the right.

use crate::utils::parse::{fixed_ints, records};
use aoc_core::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use std::str::FromStr;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2, title = "Historian Hysteria")]
pub struct Solver;

/// Left and right location-ID columns; always the same length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPair {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl ColumnPair {
    /// Pair up two columns, rejecting columns of different length
    pub fn new(left: Vec<i64>, right: Vec<i64>) -> Result<Self, ParseError> {
        if left.len() != right.len() {
            return Err(ParseError::InvalidFormat(format!(
                "column lengths differ: left has {}, right has {}",
                left.len(),
                right.len()
            )));
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

impl FromStr for ColumnPair {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (left, right): (Vec<i64>, Vec<i64>) = records(input)
            .map(|(line, text)| fixed_ints::<2>(line, text).map(|[l, r]| (l, r)))
            .process_results(|pairs| pairs.unzip())?;
        Ok(Self { left, right })
    }
}

/// Sum of distances between the columns once both are sorted
///
/// Each distance fits in a `u64`; the total is kept in a `u128` so it
/// cannot wrap for any realistic row count.
pub fn total_distance(pair: &ColumnPair) -> u128 {
    pair.left
        .iter()
        .sorted_unstable()
        .zip(pair.right.iter().sorted_unstable())
        .map(|(l, r)| u128::from(l.abs_diff(*r)))
        .sum()
}

/// Sum of each left value times its number of occurrences on the right
///
/// `None` when the score does not fit in an `i128`.
pub fn similarity_score(pair: &ColumnPair) -> Option<i128> {
    let frequencies = pair.right.iter().counts();
    pair.left.iter().try_fold(0i128, |score, value| {
        let count = frequencies.get(value).copied().unwrap_or(0);
        let term = i128::from(*value).checked_mul(i128::try_from(count).ok()?)?;
        score.checked_add(term)
    })
}

impl AocParser for Solver {
    type SharedData<'a> = ColumnPair;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pair: ColumnPair = input.parse()?;
        debug!(rows = pair.len(), "parsed location id columns");
        Ok(pair)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_distance(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        similarity_score(shared)
            .map(|score| score.to_string())
            .ok_or_else(|| SolveError::SolveFailed("similarity score overflows i128".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_core::{DayKey, RegistryBuilder};
    use proptest::prelude::*;

    const SAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    fn sample() -> ColumnPair {
        SAMPLE.parse().unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let pair = sample();
        assert_eq!(pair.left(), &[3, 4, 2, 1, 3, 3]);
        assert_eq!(pair.right(), &[4, 3, 5, 3, 9, 3]);
    }

    #[test]
    fn test_part1_sample() {
        assert_eq!(total_distance(&sample()), 11);
    }

    #[test]
    fn test_part2_sample() {
        assert_eq!(similarity_score(&sample()), Some(31));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let pair: ColumnPair = "\n\n1 2\n\n3 4\n\n".parse().unwrap();
        assert_eq!(pair.len(), 2);
        assert_eq!(pair.left(), &[1, 3]);
    }

    #[test]
    fn test_parse_empty_input() {
        let pair: ColumnPair = "".parse().unwrap();
        assert!(pair.is_empty());
        assert_eq!(total_distance(&pair), 0);
        assert_eq!(similarity_score(&pair), Some(0));
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert_eq!(
            "1 2\n3\n".parse::<ColumnPair>(),
            Err(ParseError::FieldCount {
                line: 2,
                expected: 2,
                found: 1
            })
        );
        assert!(matches!(
            "1 2 3".parse::<ColumnPair>(),
            Err(ParseError::FieldCount { found: 3, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        assert!(matches!(
            "1 2\nfour 5".parse::<ColumnPair>(),
            Err(ParseError::InvalidInteger { line: 2, .. })
        ));
    }

    #[test]
    fn test_new_rejects_unequal_columns() {
        assert!(matches!(
            ColumnPair::new(vec![1, 2], vec![1]),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(ColumnPair::new(vec![1], vec![2]).is_ok());
    }

    #[test]
    fn test_similarity_ignores_missing_values() {
        let pair = ColumnPair::new(vec![7, 8], vec![1, 2]).unwrap();
        assert_eq!(similarity_score(&pair), Some(0));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let input = format!("{min} {max}\n{min} {max}\n", min = i64::MIN, max = i64::MAX);
        let pair: ColumnPair = input.parse().unwrap();
        assert_eq!(total_distance(&pair), 2 * u128::from(u64::MAX));
        assert_eq!(similarity_score(&pair), Some(0));

        let pair: ColumnPair = "4611686018427387904 4611686018427387904\n0 4611686018427387904"
            .parse()
            .unwrap();
        assert_eq!(similarity_score(&pair), Some(1i128 << 63));

        let pair = ColumnPair::new(vec![i64::MIN, i64::MIN], vec![i64::MIN, i64::MIN]).unwrap();
        assert_eq!(similarity_score(&pair), Some(i128::from(i64::MIN) * 4));
    }

    #[test]
    fn test_extreme_values_through_solver() {
        let input = format!("{min} {max}\n{min} {max}\n", min = i64::MIN, max = i64::MAX);
        let mut shared = Solver::parse(&input).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "36893488147419103230"
        );
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "0");
    }

    #[test]
    fn test_solver_through_registry_is_repeatable() {
        let registry = RegistryBuilder::new()
            .register::<Solver>(2024, 1)
            .unwrap()
            .build();

        for _ in 0..2 {
            let mut solver = registry.create_solver(DayKey::new(2024, 1), SAMPLE).unwrap();
            let answers: Vec<_> = solver
                .solve_all()
                .unwrap()
                .into_iter()
                .map(|a| a.answer)
                .collect();
            assert_eq!(answers, vec!["11", "31"]);
        }
    }

    fn rows() -> impl Strategy<Value = Vec<(i64, i64)>> {
        prop::collection::vec((0i64..100_000, 0i64..100_000), 0..40)
    }

    fn render(rows: &[(i64, i64)]) -> String {
        rows.iter().map(|(l, r)| format!("{l}   {r}\n")).collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_answers_ignore_line_order(
            (original, shuffled) in rows().prop_flat_map(|rows| {
                let shuffled = Just(rows.clone()).prop_shuffle();
                (Just(rows), shuffled)
            })
        ) {
            let a: ColumnPair = render(&original).parse().unwrap();
            let b: ColumnPair = render(&shuffled).parse().unwrap();
            prop_assert_eq!(total_distance(&a), total_distance(&b));
            prop_assert_eq!(similarity_score(&a), similarity_score(&b));
        }

        #[test]
        fn prop_identical_columns_have_zero_distance(values in prop::collection::vec(-1000i64..1000, 0..40)) {
            let pair = ColumnPair::new(values.clone(), values.clone()).unwrap();
            prop_assert_eq!(total_distance(&pair), 0);
        }
    }
}
