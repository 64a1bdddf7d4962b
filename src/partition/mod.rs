mod lexer;
pub mod model;
mod parser;

pub use model::{render_partition_list, ModelId, Partition, PartitionList, Range, Subset};
pub use parser::{parse_partition, parse_partition_list};
