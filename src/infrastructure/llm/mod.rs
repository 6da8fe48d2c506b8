mod echo_llm_client;
mod openai_compatible_client;

pub use echo_llm_client::EchoLlmClient;
pub use openai_compatible_client::{
    GROQ_BASE_URL, OPENAI_BASE_URL, OpenAiCompatibleClient, create_llm_client,
};
