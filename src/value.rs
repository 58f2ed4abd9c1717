//! Nested value data model and the two flatten strategies.

use std::collections::VecDeque;

use tracing::instrument;

use crate::errors::{FlattenError, FlattenResult};

/// Remaining-stack red zone for the recursive walk. Once the probe reports
/// less than this, the next frames would run into the host's guard page.
const STACK_RED_ZONE: usize = 64 * 1024;

/// A value that is either an integer or a deeper nested sequence.
///
/// The derived trait impls (`Clone`, `PartialEq`, `Debug`) traverse by
/// recursion and are only meant for shallow fixtures; the flatten operations
/// below are the supported way to walk deep values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NestedValue {
    Int(i64),
    Seq(Vec<NestedValue>),
}

impl NestedValue {
    /// Collects all integer leaves in pre-order by depth-first recursion.
    ///
    /// Empty nested sequences contribute nothing. Call-stack consumption
    /// grows with nesting depth on purpose; once the host stack is nearly
    /// exhausted this fails with [`FlattenError::RecursionLimitExceeded`]
    /// instead of faulting. The threshold is whatever stack the current
    /// thread actually has, not a fixed depth cap.
    #[instrument(level = "debug", skip(self))]
    pub fn flatten_recursive(&self) -> FlattenResult<Vec<i64>> {
        let mut values = Vec::new();
        self.collect_recursive(&mut values)?;
        Ok(values)
    }

    fn collect_recursive(&self, values: &mut Vec<i64>) -> FlattenResult<()> {
        // On platforms where the stack bounds cannot be queried the probe
        // returns None and the walk runs unguarded.
        if stacker::remaining_stack().is_some_and(|r| r < STACK_RED_ZONE) {
            return Err(FlattenError::RecursionLimitExceeded);
        }
        match self {
            NestedValue::Int(v) => values.push(*v),
            NestedValue::Seq(elements) => {
                for element in elements {
                    element.collect_recursive(values)?;
                }
            }
        }
        Ok(())
    }

    /// Collects all integer leaves in pre-order using an explicit work queue.
    ///
    /// Produces the same output as [`NestedValue::flatten_recursive`] for any
    /// input where recursion succeeds, and keeps working at depths where it
    /// does not. Auxiliary memory is proportional to element count, never to
    /// nesting depth.
    #[instrument(level = "debug", skip(self))]
    pub fn flatten_stack(&self) -> Vec<i64> {
        let mut values = Vec::new();
        let mut queue: VecDeque<&NestedValue> = match self {
            NestedValue::Seq(elements) => elements.iter().collect(),
            single @ NestedValue::Int(_) => VecDeque::from([single]),
        };

        while let Some(element) = queue.pop_front() {
            match element {
                NestedValue::Int(v) => values.push(*v),
                NestedValue::Seq(children) => {
                    // Front-insert in reverse so the children keep their
                    // relative order, preserving pre-order traversal.
                    for child in children.iter().rev() {
                        queue.push_front(child);
                    }
                }
            }
        }

        values
    }
}

/// Derived drop glue would recurse once per nesting level and overflow on the
/// depths this crate is built to produce, so teardown is iterative.
impl Drop for NestedValue {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let NestedValue::Seq(children) = self {
            stack.append(children);
        }
        while let Some(mut value) = stack.pop() {
            if let NestedValue::Seq(children) = &mut value {
                stack.append(children);
            }
        }
    }
}
