pub mod blocks;
pub mod composer;
pub mod flow;
pub mod font_metrics;

pub use blocks::LayoutBlock;
pub use composer::compose;
