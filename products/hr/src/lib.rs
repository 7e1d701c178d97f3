//! HR vertical slice: the employee directory.
//!
//! The directory is fetched once per mount by [`DirectoryLoader`], held by a
//! [`DirectoryView`] and narrowed by [`FilterCriteria`]. [`render`] turns the
//! view into presentable lines.

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod render;
pub mod view;

pub use error::{RetrievalError, RetrievalResult};
pub use filter::{FilterCriteria, apply};
pub use loader::{DEFAULT_DIRECTORY_URL, DirectoryLoader, LoadHandle};
pub use model::{DirectoryDocument, Employee, EmployeeId, Project, Task, TaskId, TeamMember};
pub use view::{DirectoryView, LoadStatus, QueryField};
