mod navigation;

pub use navigation::{Icon, NavItem, NavTarget};
