//! Background jobs for dialogs and file IO, so the UI thread never blocks.
//! Results come back to the app as [`ResponseMessage`]s.

use crate::diff::{CompareOptions, CompareResult, Side};
use crate::export::{self, Report};
use crate::file::FileData;
use crate::messages::ResponseMessage;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

/// Read `path` into the given side
pub fn load_file(side: Side, path: PathBuf, sender: Sender<ResponseMessage>) {
    thread::spawn(move || {
        send_loaded(side, &path, &sender);
    });
}

/// Ask for a file, then read it into the given side
pub fn pick_and_load(side: Side, start_dir: Option<PathBuf>, sender: Sender<ResponseMessage>) {
    thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new().set_title(format!("Open {} code", side));
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            send_loaded(side, &path, &sender);
        }
    });
}

/// Ask where to save, then write the result as a JSON report
pub fn save_report(
    result: CompareResult,
    options: CompareOptions,
    start_dir: Option<PathBuf>,
    sender: Sender<ResponseMessage>,
) {
    thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save comparison report")
            .set_file_name("comparison.json")
            .add_filter("JSON", &["json"]);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return;
        };

        let response = export::write_report(&path, &Report::new(&result, &options))
            .map(|_| path)
            .map_err(|e| e.to_string());
        if let Err(e) = sender.send(ResponseMessage::ReportSaved(response)) {
            tracing::error!("Failed to send report response: {}", e);
        }
    });
}

fn send_loaded(side: Side, path: &Path, sender: &Sender<ResponseMessage>) {
    let loaded = FileData::load(path).map_err(|e| {
        tracing::warn!("Failed to read file {:?}: {}", path, e);
        format!("Failed to read {}: {}", path.display(), e)
    });
    if let Err(e) = sender.send(ResponseMessage::FileLoaded(side, loaded)) {
        tracing::error!("Failed to send loaded content: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::mpsc::channel;
    use std::time::Duration;
    use uuid::Uuid;

    #[test]
    fn test_load_file_reports_back() {
        let test_dir = std::env::temp_dir().join(format!("test_worker_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join("left.txt");
        fs::write(&path, "left side").unwrap();

        let (sender, receiver) = channel();
        load_file(Side::Original, path.clone(), sender);

        match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            ResponseMessage::FileLoaded(side, Ok(data)) => {
                assert_eq!(side, Side::Original);
                assert_eq!(data.content, "left side");
                assert_eq!(data.path, path);
            }
            _ => panic!(),
        }

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn test_load_missing_file_reports_error() {
        let path = std::env::temp_dir().join(format!("missing_{}.txt", Uuid::new_v4()));
        let (sender, receiver) = channel();
        load_file(Side::Modified, path, sender);

        match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            ResponseMessage::FileLoaded(Side::Modified, Err(message)) => {
                assert!(message.starts_with("Failed to read"));
            }
            _ => panic!(),
        }
    }
}
