//! Chat completion provider implementations

mod http_client;
mod openai_compatible;

pub use http_client::{HttpClient, HttpClientTrait};
pub use openai_compatible::{OpenAiCompatibleProvider, DEFAULT_BASE_URL};

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
