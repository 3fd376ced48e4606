pub mod flight_form;
pub mod flights_table;
