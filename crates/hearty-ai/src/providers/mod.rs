mod backend;
mod doubao;
mod gemini;
mod grok;
mod openai;
mod qwen;

pub use backend::BackendRoute;
pub use doubao::DoubaoProvider;
pub use gemini::GeminiProvider;
pub use grok::GrokProvider;
pub use openai::OpenAiProvider;
pub use qwen::QwenProvider;
