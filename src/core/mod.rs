pub mod git;
pub mod publish;
pub mod scaffold;

pub use crate::domain::model::{Asmdef, Manifest, Version};
pub use crate::domain::ports::{GitOutput, GitRunner};
pub use crate::utils::error::Result;
