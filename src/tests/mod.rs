mod document_tests;
mod report_tests;
