pub mod dispatcher;
pub mod tool_call;

pub use dispatcher::ToolDispatcher;
pub use tool_call::{ToolCall, ToolExecution, ToolOutput};
