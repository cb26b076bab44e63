//! Site Metadata

/// Document title
pub const TITLE: &str = "Climate Engineering Dashboard";

/// Meta description
pub const DESCRIPTION: &str = "Dashboard for climate engineering data and analysis";

/// Document language
pub const LANG: &str = "en";

/// Heading shown at the top of the sidebar
pub const SIDEBAR_HEADING: &str = "Climate Dashboard";
