pub mod member;
pub mod report;
