use dioxus::html::FileData;

use crate::client::util::upload::FileUpload;

/// Reads a file picked in a file input
pub async fn read_file(file: &FileData) -> Result<FileUpload, String> {
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| format!("Failed to read {}: {}", file.name(), e))?;

    Ok(FileUpload::new(file.name(), file.content_type(), bytes.to_vec()))
}

/// First file of an input's change event, if any was picked
pub async fn read_first(files: Vec<FileData>) -> Option<Result<FileUpload, String>> {
    let file = files.into_iter().next()?;

    Some(read_file(&file).await)
}
