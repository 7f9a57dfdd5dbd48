/// Fixed-size cell set used as a visited set
pub mod bitset;
/// Flood fill over level grids
pub mod fill;
