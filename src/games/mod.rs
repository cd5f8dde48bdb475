pub mod line_walk;
pub mod m_max;

pub use line_walk::LineWalk;
pub use m_max::{MMaxAction, MMaxGame};
