pub mod year_2023;
