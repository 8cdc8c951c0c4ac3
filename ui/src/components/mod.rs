mod animated_counter;
pub use animated_counter::AnimatedCounter;

mod chart_card;
pub use chart_card::ChartCard;

mod character_distribution_chart;
pub use character_distribution_chart::CharacterDistributionChart;

mod header;
pub use header::StatsHeader;

mod loading;
pub use loading::EwgfLoadingAnimation;

mod rank_distribution_chart;
pub use rank_distribution_chart::RankDistributionChart;

mod stats_grid;
pub use stats_grid::StatsGrid;

mod winrate_changes_chart;
pub use winrate_changes_chart::WinrateChangesChart;
