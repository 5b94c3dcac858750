//! Mapping Strategies
//!
//! Two ways of building the same output sequence:
//! - **Accumulate**: start empty and push each mapped element in a `for` loop
//! - **Collect**: a single `map(..).collect()` iterator expression
//!
//! Both take any `IntoIterator`, so a slice iterator or a range can be
//! replayed through either strategy.

use serde::{Deserialize, Serialize};

/// Strategy used to build the mapped sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Explicit loop appending to an empty vector
    Accumulate,
    /// Declarative `map` + `collect`
    Collect,
}

impl Strategy {
    /// Strategies in the order they are timed
    pub const ALL: [Strategy; 2] = [Strategy::Accumulate, Strategy::Collect];

    /// Label printed next to the strategy's timing
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Accumulate => "for loop",
            Strategy::Collect => "list comp",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the output by pushing each mapped element onto an empty vector.
pub fn map_accumulate<I, F, U>(input: I, mut f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    let mut output = Vec::new();
    for item in input {
        output.push(f(item));
    }
    output
}

/// Build the output with a single iterator expression.
pub fn map_collect<I, F, U>(input: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    input.into_iter().map(f).collect()
}

/// Map every element of `input` through `f` using the given strategy.
///
/// The output has the same length and order as the input.
#[inline]
pub fn map_elementwise<I, F, U>(input: I, f: F, strategy: Strategy) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    match strategy {
        Strategy::Accumulate => map_accumulate(input, f),
        Strategy::Collect => map_collect(input, f),
    }
}
