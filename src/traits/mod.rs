pub mod lister;
pub mod report_sink;

pub use lister::{ProductFetcher, ProductLister};
pub use report_sink::ReportSink;
