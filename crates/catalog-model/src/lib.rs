#![deny(unsafe_code)]

pub mod course;
pub mod radar;
pub mod theme;

pub use crate::course::{CourseModule, CourseRecord, ModuleRecord};
pub use crate::radar::{RadarPoint, parse_radar_series};
pub use crate::theme::{CourseColors, course_colors, course_emoji};
