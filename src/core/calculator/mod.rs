pub mod absence_index;
pub mod actual;
pub mod balance;
pub mod range;
pub mod target;
