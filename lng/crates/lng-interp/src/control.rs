//! Non-local control flow. `return`/`break`/`continue` are modeled as a
//! value threaded up through statement execution rather than a host
//! exception: each statement returns `Result<Flow, RuntimeError>`, and a
//! non-`Normal` flow propagates up until something is there to catch it
//! (a loop catches `Break`/`Continue`, a call frame catches `Return`).

use crate::value::Value;

pub enum Flow {
    Normal,
    Return(Value),
    Break,
    Continue,
}
