pub mod lsr_crawler;

pub use lsr_crawler::LsrCrawler;
