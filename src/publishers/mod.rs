pub mod file;

pub use file::FileReportWriter;
