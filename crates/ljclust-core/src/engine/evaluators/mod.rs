pub mod dense;
pub mod pairwise;

#[cfg(feature = "parallel")]
pub mod blocked;
#[cfg(feature = "parallel")]
pub mod parallel;
