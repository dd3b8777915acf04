pub mod add;
pub mod day;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod week;
