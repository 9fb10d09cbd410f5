mod catalog;
mod common;
mod report;
mod scoring;
