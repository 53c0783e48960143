mod chart;
mod stats;
mod table;
pub mod view;
