pub mod a001_language;
pub mod a002_language_set;
pub mod a003_trans_platform;
pub mod a004_release_stream;
pub mod a005_release_branch;
pub mod a006_package;
pub mod a007_job_template;
pub mod a008_job;
pub mod a009_sync_stat;
pub mod a010_graph_rule;
pub mod a011_cache_api;
pub mod a012_report;
pub mod a013_visitor;
