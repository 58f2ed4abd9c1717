//! Generate a nested sequence of configurable depth, then flatten it back
//! into a single ordered sequence of integers.
//!
//! Two flattening strategies with the same contract are provided:
//! depth-first recursive descent and an explicit-stack iterative walk. The
//! recursive walk deliberately consumes one call frame per nesting level and
//! fails once the host stack is nearly exhausted; the iterative walk keeps
//! working at any depth.
//!
//! ```
//! use rsflat::SequenceBuilder;
//!
//! let builder = SequenceBuilder::new(4);
//! assert_eq!(builder.flatten_recursive().unwrap(), builder.flatten_stack());
//! ```

pub mod builder;
pub mod errors;
pub mod rng;
pub mod util;
pub mod value;

pub use builder::SequenceBuilder;
pub use errors::{FlattenError, FlattenResult};
pub use rng::{CountingSource, IntegerSource, SeededSource, ThreadRngSource};
pub use value::NestedValue;
