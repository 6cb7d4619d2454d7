mod accordion;
pub use accordion::*;

mod badge;
pub use badge::*;

mod button;
pub use button::*;

mod carousel;
pub use carousel::*;

mod checkbox;
pub use checkbox::*;

mod collapsible;
pub use collapsible::*;

mod command;
pub use command::*;

mod dialog;
pub use dialog::*;

mod dropdown_menu;
pub use dropdown_menu::*;

mod hover_card;
pub use hover_card::*;

mod menubar;
pub use menubar::*;

mod popover;
pub use popover::*;

mod radio_group;
pub use radio_group::*;

mod select;
pub use select::*;

mod switch;
pub use switch::*;

mod tabs;
pub use tabs::*;

mod toggle;
pub use toggle::*;

mod toggle_group;
pub use toggle_group::*;
