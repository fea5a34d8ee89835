//! Mount protocol between the host runtime and the widget.

pub mod mount;
pub mod registry;

pub use mount::{mount, unmount, ChangeSink, MountError, ROOT_CLASSES};
pub use registry::{InstanceId, InstanceRegistry};
