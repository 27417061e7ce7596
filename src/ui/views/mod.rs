pub mod create;
pub mod quiz;
pub mod results;
pub mod role_select;
pub mod student;
pub mod teacher;
