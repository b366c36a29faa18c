pub mod config;
pub mod error;
pub mod logging;
pub mod url_model;

pub use error::{AuthorityError, ParseError};
pub use url_model::{parse, parse_with, ParseOptions, QueryMap, UrlRecord};
