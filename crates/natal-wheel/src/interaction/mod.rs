pub mod events;
pub mod view_state;

pub use events::{Key, WheelEvent};
pub use view_state::{ViewState, ZoomLimits, BINDABLE_ACTIONS};
