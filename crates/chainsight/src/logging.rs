use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (2 MB)
const MAX_LOG_SIZE: u64 = 2 * 1024 * 1024;
/// Size to keep after rotation (most recent 512 KB)
const KEEP_SIZE: u64 = 512 * 1024;

/// Trim the log file down to its most recent KEEP_SIZE bytes once it grows
/// past MAX_LOG_SIZE.
fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let file_size = fs::metadata(log_path)?.len();
    if file_size <= MAX_LOG_SIZE {
        return Ok(());
    }

    let mut file = File::open(log_path)?;
    file.seek(SeekFrom::Start(file_size.saturating_sub(KEEP_SIZE)))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Skip to the first newline so the kept tail starts on a full line
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- log rotated, older entries removed ---\n")?;
    file.write_all(&buffer[skip..])?;
    Ok(())
}

/// Writer factory handing out handles to the shared log file
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.lock().unwrap().flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Initialize logging to `{data_dir}/chainsight.log` with size-based
/// rotation. The level comes from `RUST_LOG` when set, otherwise from the
/// `level` parameter.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join("chainsight.log");

    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let writer_factory = LogWriterFactory {
        file: Arc::new(Mutex::new(file)),
    };

    let default_filter = format!("chainsight={level},chainsight_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer_factory)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!("chainsight logging initialized (log_path={})", log_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_keeps_recent_tail() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("chainsight.log");

        let mut contents = String::new();
        let mut line_no = 0u64;
        while contents.len() as u64 <= MAX_LOG_SIZE {
            contents.push_str(&format!("line {line_no} with padding to grow the file\n"));
            line_no += 1;
        }
        fs::write(&log_path, &contents).unwrap();

        rotate_log_if_needed(&log_path).unwrap();

        let rotated = fs::read_to_string(&log_path).unwrap();
        assert!((rotated.len() as u64) <= KEEP_SIZE + 64);
        assert!(rotated.starts_with("--- log rotated"));

        // The kept tail starts on a full line and is a suffix of the original
        let tail = rotated.split_once('\n').unwrap().1;
        assert!(tail.starts_with("line "));
        assert!(contents.ends_with(tail));
    }

    #[test]
    fn test_small_files_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("chainsight.log");
        fs::write(&log_path, "one line\n").unwrap();

        rotate_log_if_needed(&log_path).unwrap();
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "one line\n");
    }

    #[test]
    fn test_missing_file_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        rotate_log_if_needed(&dir.path().join("chainsight.log")).unwrap();
    }
}
