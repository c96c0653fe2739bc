//! UI Components

mod animate_in;
mod icons;
mod skills_orbit;

pub use animate_in::AnimateIn;
pub use icons::{Icon, IconKind};
pub use skills_orbit::SkillsOrbit;
