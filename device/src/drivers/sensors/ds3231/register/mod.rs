pub mod date;
pub mod hours;
pub mod minutes;
pub mod seconds;
pub mod temperature;
