/// Relationship start date used when the config doesn't set one.
pub const DEFAULT_START_DATE: &str = "2023-07-08";

/// Port the upload server listens on by default.
pub const DEFAULT_SERVER_PORT: u16 = 4096;

/// Product identifier written into exported calendars.
pub const ICS_PRODID: &str = "-//lovedir//Anniversaries//EN";

/// Domain part of generated event UIDs.
pub const ICS_UID_DOMAIN: &str = "lovedir";

/// File name of the journal inside the data directory.
pub const JOURNAL_FILE: &str = "journal.json";
