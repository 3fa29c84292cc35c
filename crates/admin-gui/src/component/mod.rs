//! Reusable widgets.

pub mod column_menu;
pub mod data_table;
pub mod modal;
pub mod pagination;
pub mod search_box;
pub mod toast;

pub use column_menu::{column_menu, column_menu_button};
pub use data_table::data_table;
pub use modal::{Confirmation, confirm_modal, modal};
pub use pagination::pagination;
pub use search_box::search_box;
pub use toast::{ToastState, ToastType, view_toast};
