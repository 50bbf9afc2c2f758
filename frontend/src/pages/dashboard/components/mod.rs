mod details_dialog;
mod process_form;
mod process_list;

pub use details_dialog::ProcessDetailsDialog;
pub use process_form::ProcessForm;
pub use process_list::ProcessList;
