pub mod builder;
pub mod context;
pub mod loop_;
pub mod profile;
pub mod registry;

pub use builder::AgentBuilder;
pub use context::{ContextBuilder, SYSTEM_PERSONA, UserContext};
pub use loop_::{APOLOGY_MESSAGE, AgentLoop, AgentReply};
pub use profile::AgentProfile;
pub use registry::ToolRegistry;
