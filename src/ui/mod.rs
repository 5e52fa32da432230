pub mod apply;
pub mod audio;
pub mod common;
pub mod countdown;
pub mod hero;
pub mod pages;

pub use apply::ApplySection;
pub use audio::ThemeAudio;
pub use countdown::CountdownDisplay;
pub use hero::Hero;
