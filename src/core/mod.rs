pub mod absence_edit;
pub mod calculator;
pub mod report;
