/// Writes both documents into `dir`, returning the paths written.
///
/// Each file is written next to its destination first and then moved into place, so
/// readers see either the old or the new content.
pub async fn write(
    dir: &std::path::Path,
    rendered: &report::page::Rendered,
) -> Result<Vec<std::path::PathBuf>, crate::error::RunError> {
    let files = [
        (report::page::PLAYER_COUNT_FILE, &rendered.player_count),
        (report::page::PAGE_FILE, &rendered.page),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        replace(&path, content)
            .await
            .map_err(|source| crate::error::RunError::Output {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Wrote {:?}", path);
        written.push(path);
    }

    Ok(written)
}

async fn replace(path: &std::path::Path, content: &str) -> std::io::Result<()> {
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(path.file_name().unwrap_or_default());
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    tokio::fs::write(&tmp_path, content).await?;
    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e);
    }

    Ok(())
}
