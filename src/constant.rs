// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
pub const DEFAULT_WINDOW_TITLE: &str = "Code Compare";

/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "CodeCompare";
pub const APP_NAME: &str = "Code Compare";

/// App related Magic Numbers
pub const MAX_RECENT_FILES: usize = 10;
pub const DEFAULT_FONT_SIZE: f32 = 13.0;
pub const REPORT_DIR: &str = "reports";

/// Placeholder text shown in the empty inputs
pub const ORIGINAL_PLACEHOLDER: &str = "// Enter your original code here
function hello() {
    console.log(\"Hello World!\");
}";
pub const MODIFIED_PLACEHOLDER: &str = "// Enter your modified code here
function hello() {
    console.log(\"Hello GeekNeuron!\");
    console.log(\"Welcome to CodeCompare!\");
}";
