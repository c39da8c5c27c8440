pub mod button;
pub mod input;
pub mod select;

pub use button::Button;
pub use input::{AmountInput, Input};
pub use select::Select;
