use code_compare::app::CodeCompareApp;
use code_compare::constant;
use code_compare::ui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional: code-compare <original> <modified>
    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let initial_files = [args.next(), args.next()];
    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(CodeCompareApp::new(cc, initial_files)))),
    )
}
