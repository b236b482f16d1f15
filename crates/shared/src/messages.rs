//! User-visible strings shared by every front end.

pub const NO_FILE_SELECTED: &str = "Please select a file to upload.";
pub const UNSUPPORTED_FORMAT: &str = "Only PDF and DOCX files are supported.";
pub const UNKNOWN_SERVER_ERROR: &str = "Unknown error occurred";
pub const GENERIC_ANALYSIS_ERROR: &str = "An error occurred during analysis.";
pub const REQUEST_TIMED_OUT: &str = "The analysis request timed out. Please try again.";

pub const FILE_NAME_PLACEHOLDER: &str = "No file selected";

pub const RESUME_TOO_SHORT: &str = "Your resume is too short. Consider adding more details.";
pub const RESUME_TOO_LONG: &str = "Your resume is quite long. Consider making it more concise.";
pub const NO_SKILLS_IDENTIFIED: &str =
    "No specific skills identified. Consider adding more technical or industry-specific skills.";
pub const DEFAULT_RECOMMENDATION: &str =
    "Your resume looks good! Consider tailoring it to specific job descriptions.";
