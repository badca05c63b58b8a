pub mod date_input;
pub mod month_input;
