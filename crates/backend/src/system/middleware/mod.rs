pub mod visitor_log;
