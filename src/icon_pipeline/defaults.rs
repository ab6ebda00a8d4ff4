//! 默认图标拷贝
//!
//! 未配置源 Logo 时，把预置的默认图标目录整棵拷贝到输出目录，
//! 相对路径保持不变，不做任何渲染。符号链接按其指向的目标处理。

use std::fs;
use std::path::{Path, PathBuf};

use super::IconError;

/// 递归拷贝 `source_dir` 到 `output_dir`，返回写入的文件路径（按路径排序）。
pub fn copy_default_icons(source_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    if !source_dir.is_dir() {
        return Err(IconError::FileSystem(format!(
            "默认图标目录不存在：{}",
            source_dir.display()
        )));
    }

    fs::create_dir_all(output_dir).map_err(|e| {
        IconError::FileSystem(format!("创建输出目录 '{}' 失败：{}", output_dir.display(), e))
    })?;

    let mut copied = Vec::new();
    copy_dir_recursive(source_dir, output_dir, &mut copied)?;
    copied.sort();

    log::info!(
        "📦 已拷贝默认图标 {} 个：{} -> {}",
        copied.len(),
        source_dir.display(),
        output_dir.display()
    );

    Ok(copied)
}

fn copy_dir_recursive(src: &Path, dst: &Path, copied: &mut Vec<PathBuf>) -> Result<(), IconError> {
    let entries = fs::read_dir(src)
        .map_err(|e| IconError::FileSystem(format!("读取目录 '{}' 失败：{}", src.display(), e)))?;

    for entry in entries {
        let entry = entry
            .map_err(|e| IconError::FileSystem(format!("读取目录项失败：{}", e)))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        // fs::metadata 跟随符号链接，链接到目录的条目按目录递归
        let metadata = fs::metadata(&from).map_err(|e| {
            IconError::FileSystem(format!("读取文件信息 '{}' 失败：{}", from.display(), e))
        })?;

        if metadata.is_dir() {
            fs::create_dir_all(&to).map_err(|e| {
                IconError::FileSystem(format!("创建目录 '{}' 失败：{}", to.display(), e))
            })?;
            copy_dir_recursive(&from, &to, copied)?;
        } else {
            fs::copy(&from, &to).map_err(|e| {
                IconError::FileSystem(format!(
                    "复制 '{}' -> '{}' 失败：{}",
                    from.display(),
                    to.display(),
                    e
                ))
            })?;
            copied.push(to);
        }
    }

    Ok(())
}
