pub mod error;
pub mod gemini;
pub mod traits;
pub mod util;

pub use error::AiError;
pub use gemini::Gemini;
pub use traits::{Agent, PromptBuilder};
pub use util::{strip_json_noise, truncate_chars};
