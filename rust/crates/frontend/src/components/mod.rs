//! Reusable UI components.

mod bar_chart;
mod detail_section;
mod loading;
mod pager;
mod stat_card;
mod student_row;

pub use bar_chart::{BarChart, BarDatum};
pub use detail_section::{DetailSection, LabelValue};
pub use loading::Loading;
pub use pager::Pager;
pub use stat_card::StatCard;
pub use student_row::StudentRow;
