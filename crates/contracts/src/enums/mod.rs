pub mod trans_format;
