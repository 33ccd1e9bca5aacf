pub mod export;
pub mod import;

// Re-export main functions for convenience
pub use export::{export_bookmarks, export_filename, write_export, ExportBundle};
pub use import::{
    import_bookmarks, merge_bookmarks, parse_import, read_import_file, ImportOutcome, ImportReport,
};
