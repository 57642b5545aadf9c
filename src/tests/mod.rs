pub mod common;

mod test_unique;
mod test_wed;
