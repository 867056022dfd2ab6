pub mod error;
#[cfg(feature = "ops")]
pub(crate) mod iter;
pub mod result;

#[cfg(test)]
pub(crate) mod fixture;
