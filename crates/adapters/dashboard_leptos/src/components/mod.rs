mod button;
mod header_bar;
mod icon;
mod input_field;
mod select_field;
mod stat_card;
mod stats_grid;
mod welcome_section;

pub use button::Button;
pub use header_bar::HeaderBar;
pub use icon::IconView;
pub use input_field::InputField;
pub use select_field::SelectField;
pub use stat_card::StatCard;
pub use stats_grid::StatsGrid;
pub use welcome_section::WelcomeSection;
