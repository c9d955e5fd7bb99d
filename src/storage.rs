use std::fs;
use std::io;
use std::path::Path;

use crate::models::{History, HistoryData};

/// 从TOML文件加载历史记录
pub fn load_history(path: &Path) -> io::Result<History> {
    if !path.exists() {
        return Ok(History::new());
    }

    let content = fs::read_to_string(path)?;
    let data: HistoryData =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(History::from_data(data))
}

/// 保存历史记录到TOML文件
pub fn save_history(history: &mut History, path: &Path) -> io::Result<()> {
    if !history.dirty {
        return Ok(());
    }

    let data = history.to_data();
    let content =
        toml::to_string_pretty(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, content)?;

    history.dirty = false;
    Ok(())
}
