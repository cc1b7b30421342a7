pub mod assign;
pub mod report;
pub mod season;
pub mod teams;
