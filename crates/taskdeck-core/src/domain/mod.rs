//! Domain model (IDs, task record, input specs, errors, counts).

pub mod counts;
pub mod errors;
pub mod ids;
pub mod spec;
pub mod task;

pub use self::counts::TaskCounts;
pub use self::errors::{FieldError, TaskError};
pub use self::ids::TaskId;
pub use self::spec::{DESCRIPTION_MAX_CHARS, StatusPatch, TaskSpec, TITLE_MAX_CHARS};
pub use self::task::{Task, TaskStatus};
