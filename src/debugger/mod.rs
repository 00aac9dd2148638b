use crate::error::Result;
use serde_json::Value;

/// A trait for components whose registers can be dumped and restored.
pub trait Debuggable {
    /// Reads the component's state and returns it as a JSON value.
    fn read_state(&self) -> Value;

    /// Writes the component's state from a JSON value.
    ///
    /// On error the component is left unchanged.
    fn write_state(&mut self, state: &Value) -> Result<()>;
}
