//! Quotes module - vendor price quotes normalized into a reference currency.

mod quotes_model;
mod quotes_service;
mod quotes_traits;


pub use quotes_model::{cheapest_first, ConvertedQuote, NewQuote, Quote, QuoteDetails};
pub use quotes_service::QuoteService;
pub use quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
