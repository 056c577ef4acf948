//! Parsing of the whitespace-delimited batch format:
//!
//! ```text
//! T
//! n
//! a_1 a_2 ... a_n
//! [repeated T times]
//! ```

use std::str::{FromStr, SplitWhitespace};

use log::debug;

use crate::error::{Error, Result};

/// One sequence to be solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub values: Vec<i64>,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T>(&mut self, expected: &'static str) -> Result<T>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        let token = self.inner.next().ok_or(Error::UnexpectedEof { expected })?;
        token
            .parse()
            .map_err(|source| Error::invalid_integer(token, source))
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

/// Parses every test case in `text`.
///
/// Tokens after the last declared test case are ignored.
///
/// # Examples
///
/// ```
/// use segment_savings::{parse_test_cases, TestCase};
///
/// let cases = parse_test_cases("2\n2\n7 7\n2\n3 9\n").unwrap();
/// assert_eq!(cases, vec![
///     TestCase { values: vec![7, 7] },
///     TestCase { values: vec![3, 9] },
/// ]);
/// ```
pub fn parse_test_cases(text: &str) -> Result<Vec<TestCase>> {
    let mut tokens = Tokens::new(text);
    let count: usize = tokens.next("test case count")?;

    // The declared count is untrusted; grow as cases are actually read.
    let mut cases = Vec::new();
    for _ in 0..count {
        let n: usize = tokens.next("sequence length")?;
        let values = (0..n)
            .map(|_| tokens.next::<i64>("sequence value"))
            .collect::<Result<Vec<_>>>()?;
        cases.push(TestCase { values });
    }

    let extra = tokens.remaining();
    if extra > 0 {
        debug!("ignoring {} trailing tokens", extra);
    }
    debug!("parsed {} test cases", cases.len());
    Ok(cases)
}
