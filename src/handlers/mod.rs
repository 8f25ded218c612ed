pub mod health;
pub mod prompt;
pub mod settings;

pub use health::*;
pub use prompt::*;
pub use settings::*;
