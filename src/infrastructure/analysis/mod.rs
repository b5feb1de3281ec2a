//! Language identification backends

mod stopword_identifier;

pub use stopword_identifier::StopwordLanguageIdentifier;
