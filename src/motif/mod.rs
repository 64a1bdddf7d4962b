pub mod information;
pub mod matrix;
pub mod pwm;

pub use information::{best_offset, entropy, information_content, kl_divergence, r_sequence};
pub use matrix::{average_counts, frequencies, posterior_motif, reverse_complement};
pub use pwm::{pwm, scan, score, ScanHit};
