pub mod clock;
pub mod indicator;
pub mod legend;
pub mod scatter;
pub mod table;

pub use clock::ClockWidget;
pub use indicator::IndicatorWidget;
pub use legend::LegendWidget;
pub use scatter::ScatterWidget;
pub use table::TableWidget;
