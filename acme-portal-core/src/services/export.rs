//! 证书导出
//!
//! 把签发结果写成常见的 PEM 文件布局：
//! `cert.pem`、`chain.pem`（仅在有中间证书时）、`fullchain.pem`、`privkey.pem`。

use std::path::{Path, PathBuf};

use log::info;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{PortalError, PortalResult};
use crate::services::certificate::split_certificate_chain;
use crate::types::IssuedCertificate;

/// 导出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    /// 目标目录
    pub dir: PathBuf,
    /// 实际写入的文件，按写入顺序
    pub files: Vec<PathBuf>,
}

fn storage_error(path: &Path, e: &std::io::Error) -> PortalError {
    PortalError::Storage(format!("{}: {e}", path.display()))
}

async fn write_public(path: PathBuf, content: &str) -> PortalResult<PathBuf> {
    fs::write(&path, content)
        .await
        .map_err(|e| storage_error(&path, &e))?;
    Ok(path)
}

/// 私钥文件只对当前用户可读写
async fn write_private(path: PathBuf, content: &str) -> PortalResult<PathBuf> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options
        .open(&path)
        .await
        .map_err(|e| storage_error(&path, &e))?;
    file.write_all(content.as_bytes())
        .await
        .map_err(|e| storage_error(&path, &e))?;
    file.flush().await.map_err(|e| storage_error(&path, &e))?;
    Ok(path)
}

fn with_newline(text: &str) -> String {
    let mut out = text.trim().to_string();
    out.push('\n');
    out
}

/// 把签发结果写入 `dir`，目录不存在时创建
pub async fn export_certificate(
    dir: &Path,
    certificate: &IssuedCertificate,
) -> PortalResult<ExportedFiles> {
    let chain = split_certificate_chain(&certificate.certificate);
    if chain.blocks.is_empty() {
        return Err(PortalError::Storage(
            "Nothing to export: the response contains no certificate".to_string(),
        ));
    }

    fs::create_dir_all(dir)
        .await
        .map_err(|e| storage_error(dir, &e))?;

    let mut files = Vec::with_capacity(4);
    files.push(write_public(dir.join("cert.pem"), &with_newline(&chain.leaf)).await?);
    if chain.has_bundle() {
        files.push(write_public(dir.join("chain.pem"), &with_newline(&chain.bundle)).await?);
    }
    files.push(write_public(dir.join("fullchain.pem"), &chain.full_chain()).await?);
    if !certificate.private_key.trim().is_empty() {
        files.push(
            write_private(dir.join("privkey.pem"), &with_newline(&certificate.private_key)).await?,
        );
    }

    info!(
        "[Export] wrote {} file(s) to {}",
        files.len(),
        dir.display()
    );

    Ok(ExportedFiles {
        dir: dir.to_path_buf(),
        files,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::sample_certificate;

    const LEAF: &str = include_str!("../../tests/fixtures/leaf.pem");
    const INTERMEDIATE: &str = include_str!("../../tests/fixtures/intermediate.pem");

    fn names(exported: &ExportedFiles) -> Vec<String> {
        exported
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[tokio::test]
    async fn writes_full_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("abc123");
        let mut cert = sample_certificate();
        cert.certificate = format!("{LEAF}{INTERMEDIATE}");

        let exported = export_certificate(&dir, &cert).await.unwrap();

        assert_eq!(
            names(&exported),
            vec!["cert.pem", "chain.pem", "fullchain.pem", "privkey.pem"]
        );
        let leaf = std::fs::read_to_string(dir.join("cert.pem")).unwrap();
        assert_eq!(leaf.trim(), LEAF.trim());
        let chain = std::fs::read_to_string(dir.join("chain.pem")).unwrap();
        assert_eq!(chain.trim(), INTERMEDIATE.trim());
        let full = std::fs::read_to_string(dir.join("fullchain.pem")).unwrap();
        assert_eq!(full, format!("{}\n{}\n", LEAF.trim(), INTERMEDIATE.trim()));
    }

    #[tokio::test]
    async fn single_block_has_no_chain_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cert = sample_certificate();
        cert.certificate = LEAF.to_string();

        let exported = export_certificate(tmp.path(), &cert).await.unwrap();

        assert_eq!(
            names(&exported),
            vec!["cert.pem", "fullchain.pem", "privkey.pem"]
        );
        assert!(!tmp.path().join("chain.pem").exists());
    }

    #[tokio::test]
    async fn empty_private_key_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cert = sample_certificate();
        cert.private_key = String::new();

        let exported = export_certificate(tmp.path(), &cert).await.unwrap();
        assert!(!names(&exported).contains(&"privkey.pem".to_string()));
    }

    #[tokio::test]
    async fn empty_certificate_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cert = sample_certificate();
        cert.certificate = "   ".to_string();

        let err = export_certificate(tmp.path(), &cert).await.unwrap_err();
        assert!(matches!(err, PortalError::Storage(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn private_key_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        export_certificate(tmp.path(), &sample_certificate())
            .await
            .unwrap();

        let mode = std::fs::metadata(tmp.path().join("privkey.pem"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
