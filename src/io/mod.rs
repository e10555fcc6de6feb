//! A module containing the material used to read frameworks from raw text.

mod parsers;
pub use parsers::parse_contraries;
pub use parsers::parse_groups;
pub use parsers::parse_literals;
pub use parsers::parse_preferences;
pub use parsers::parse_rules;

mod text_reader;
pub use text_reader::FrameworkSource;
pub use text_reader::TextFrameworkReader;
