pub mod convert;
pub mod logging;
pub mod schema;
pub mod shared;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
