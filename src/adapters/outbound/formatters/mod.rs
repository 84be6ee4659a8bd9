/// Report formatter adapters for the LIST and TABLE formats
mod list_formatter;
mod palette;
mod score_block;
mod table_formatter;

pub use list_formatter::ListFormatter;
pub use table_formatter::TableFormatter;
