pub mod analyze_button;
pub mod header;
pub mod info_section;
pub mod language_selector;
pub mod postal_code_input;
pub mod results_section;
pub mod upload_area;
