pub mod http_typeahead;
pub mod page_loader;
