extern crate clap;
extern crate colored;
extern crate num;
extern crate num_traits;
extern crate time;

pub mod ascending;
pub mod bounded;
pub mod error;
pub mod multiset;
pub mod partition;
pub mod program_flow;
pub mod reduction;
pub mod source;
pub mod strategy;
pub mod timer;
pub mod util;
pub mod validation;
#[cfg(test)]
mod test_util;

pub use crate::ascending::{AscendingCompositions, Variant};
pub use crate::bounded::BoundedPartitions;
pub use crate::error::Error;
pub use crate::multiset::MultisetPartitions;
pub use crate::partition::{Multiset, Partition};
pub use crate::reduction::{PartOrder, RecursiveReduction};
pub use crate::source::PartitionSource;
pub use crate::strategy::{enumerate_partitions, Partitions, Strategy};
