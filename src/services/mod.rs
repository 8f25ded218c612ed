pub mod credential_store;
pub mod enhancer_prompt;
pub mod openai;
pub mod prompt_service;

pub use credential_store::CredentialStore;
pub use enhancer_prompt::EnhancerPromptConfig;
pub use openai::{EnhancerError, OpenAIService};
pub use prompt_service::{GenerationMode, PromptGeneration, PromptService, PromptSource};
