pub mod catalog_http;
