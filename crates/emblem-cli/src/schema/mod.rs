pub mod emblem_data;
pub mod team_report;
