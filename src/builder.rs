//! Iterative construction of nested sequences with a deterministic shape.

use tracing::{debug, instrument};

use crate::errors::FlattenResult;
use crate::rng::{IntegerSource, ThreadRngSource};
use crate::value::NestedValue;

/// Number of slots per nesting level.
pub const LEVEL_WIDTH: usize = 5;

/// Inclusive range for generated integer values.
pub const VALUE_RANGE: (i64, i64) = (1, 10);

/// Builds a nested sequence of a requested depth and flattens it.
///
/// Every level above the deepest holds four integers and one nested sequence
/// at a uniformly random slot; the deepest level holds five integers.
/// Construction is level-by-level rather than recursive, so arbitrarily
/// large depths never touch the call stack. The built value is owned by the
/// builder and immutable afterwards.
///
/// ```
/// use rsflat::SequenceBuilder;
///
/// let builder = SequenceBuilder::new(4);
/// let flat = builder.flatten_stack();
/// assert_eq!(flat.len(), 4 * (4 - 1) + 5);
/// assert_eq!(builder.flatten_recursive().unwrap(), flat);
/// ```
#[derive(Debug)]
pub struct SequenceBuilder {
    depth: usize,
    value: NestedValue,
}

impl SequenceBuilder {
    /// Builds with the thread-local RNG. Depth requests below 1 coerce to 1.
    pub fn new(depth: i64) -> Self {
        Self::with_source(depth, &mut ThreadRngSource)
    }

    /// Builds with an injected integer source.
    ///
    /// Each inner level costs 5 draws (1 slot index + 4 values); the deepest
    /// level costs 6 (1 slot index + 5 values).
    #[instrument(level = "debug", skip(source))]
    pub fn with_source<S: IntegerSource>(depth: i64, source: &mut S) -> Self {
        let depth = depth.max(1) as usize;

        // Draw all levels top-down first so the source is consumed in
        // document order, then stitch bottom-up into the placeholders.
        let levels: Vec<(Vec<NestedValue>, usize)> = (1..=depth)
            .map(|level| fill_level(source, level < depth))
            .collect();
        debug!(depth, "levels drawn");

        let mut current: Option<Vec<NestedValue>> = None;
        for (mut elements, slot) in levels.into_iter().rev() {
            if let Some(child) = current.take() {
                elements[slot] = NestedValue::Seq(child);
            }
            current = Some(elements);
        }

        Self {
            depth,
            value: NestedValue::Seq(current.unwrap_or_default()),
        }
    }

    /// The built structure.
    pub fn value(&self) -> &NestedValue {
        &self.value
    }

    /// Effective nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pre-order leaf collection by recursive descent.
    ///
    /// Fails with [`crate::FlattenError::RecursionLimitExceeded`] once the
    /// nesting depth exhausts the host call stack.
    pub fn flatten_recursive(&self) -> FlattenResult<Vec<i64>> {
        self.value.flatten_recursive()
    }

    /// Pre-order leaf collection with an explicit work queue; works at any
    /// depth.
    pub fn flatten_stack(&self) -> Vec<i64> {
        self.value.flatten_stack()
    }
}

/// Fills one level with `LEVEL_WIDTH` slots. A slot index is drawn even at
/// the deepest level, where it receives an integer like every other slot.
fn fill_level<S: IntegerSource>(source: &mut S, nested: bool) -> (Vec<NestedValue>, usize) {
    let slot = source.random_int(0, LEVEL_WIDTH as i64 - 1) as usize;
    let (low, high) = VALUE_RANGE;
    let mut elements = Vec::with_capacity(LEVEL_WIDTH);
    for idx in 0..LEVEL_WIDTH {
        if nested && idx == slot {
            elements.push(NestedValue::Seq(Vec::new()));
        } else {
            elements.push(NestedValue::Int(source.random_int(low, high)));
        }
    }
    (elements, slot)
}
