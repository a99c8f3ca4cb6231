//! ブラウザのコンソールへのログ出力

use std::io;

use tracing_subscriber::EnvFilter;

/// 1 イベント分の出力をまとめてコンソールへ書き出す
#[derive(Debug, Default)]
struct ConsoleWriter {
    /// 整形済みの出力
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&line.trim_end().into());
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// ログ出力を初期化する
///
/// `log_level` は検証済みの `EnvFilter` ディレクティブ。2 回目以降の呼び出しは無視される。
pub(crate) fn init(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging was already initialized");
    }
}
