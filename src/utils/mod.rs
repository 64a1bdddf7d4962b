mod background;
mod error;
mod index_policy;
pub mod math;
mod nucleotide;
mod priors;
mod readers;
mod sequences;
mod util;

pub use background::Background;
pub use error::MotifError;
pub use index_policy::IndexPolicy;
pub use math::Matrix;
pub use nucleotide::{complement_code, Nucleotide, SoftColumn, GAP, NUM_BASES};
pub use priors::PriorTable;
pub use readers::{open_input_reader, read_input_to_string};
pub use sequences::{read_fasta, SoftSequence, SoftSequences};
pub use util::{handle_error_and_exit, Result};
