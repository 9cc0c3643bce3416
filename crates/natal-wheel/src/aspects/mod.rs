pub mod filter;
pub mod types;

pub use filter::visible_chords;
pub use types::{AspectKind, AspectTone, Chord};
