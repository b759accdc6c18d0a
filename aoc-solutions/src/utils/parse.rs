//! Line and token helpers shared by the day parsers
//!
//! Line numbers in errors are 1-based and count blank lines, so they match
//! what an editor shows for the input file.

use aoc_core::ParseError;

/// Non-blank lines of `input`, each paired with its line number
pub fn records(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Parse one whitespace-delimited token as an integer
pub fn int(line: usize, token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidInteger {
        line,
        token: token.to_string(),
        source,
    })
}

/// Every whitespace-separated token of `text` as an integer
pub fn ints(line: usize, text: &str) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace().map(|token| int(line, token)).collect()
}

/// Exactly `N` whitespace-separated integers
///
/// The field count is checked before any token is parsed.
pub fn fixed_ints<const N: usize>(line: usize, text: &str) -> Result<[i64; N], ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ParseError::FieldCount {
            line,
            expected: N,
            found: tokens.len(),
        });
    }

    let mut values = [0; N];
    for (slot, token) in values.iter_mut().zip(tokens) {
        *slot = int(line, token)?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_skip_blank_lines_and_keep_numbers() {
        let input = "\n1 2\n   \n3 4\n\n";
        let lines: Vec<_> = records(input).collect();
        assert_eq!(lines, vec![(2, "1 2"), (4, "3 4")]);
    }

    #[test]
    fn test_records_handles_crlf() {
        let lines: Vec<_> = records("1\r\n2\r\n").collect();
        assert_eq!(lines, vec![(1, "1"), (2, "2")]);
    }

    #[test]
    fn test_ints_accepts_any_whitespace() {
        assert_eq!(ints(1, " 7\t6   4 -2 ").unwrap(), vec![7, 6, 4, -2]);
        assert_eq!(ints(1, "").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_ints_reports_bad_token() {
        match ints(9, "1 2x 3") {
            Err(ParseError::InvalidInteger { line, token, .. }) => {
                assert_eq!(line, 9);
                assert_eq!(token, "2x");
            }
            other => panic!("expected InvalidInteger, got {:?}", other),
        }
    }

    #[test]
    fn test_fixed_ints_checks_count_first() {
        assert_eq!(fixed_ints::<2>(1, "3   4").unwrap(), [3, 4]);
        assert_eq!(
            fixed_ints::<2>(5, "x y z"),
            Err(ParseError::FieldCount {
                line: 5,
                expected: 2,
                found: 3
            })
        );
        assert!(matches!(
            fixed_ints::<2>(2, "1 b"),
            Err(ParseError::InvalidInteger { line: 2, .. })
        ));
    }
}
