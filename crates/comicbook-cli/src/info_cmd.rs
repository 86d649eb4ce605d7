use std::path::Path;

use comicbook::comicbook_archive::ArchiveReader;

use crate::cli::TextFormat;
use crate::shared::open_document;

pub fn run(file: &Path, format: &TextFormat) -> Result<(), i32> {
    let doc = open_document(file)?;
    let container = ArchiveReader::open(file)
        .map(|reader| reader.kind().to_string())
        .map_err(|e| {
            eprintln!("Error: failed to open archive: {e}");
            1
        })?;

    match format {
        TextFormat::Text => {
            println!("File: {}", file.display());
            println!("Container: {container}");
            println!("Pages: {}", doc.page_count());
            if doc.page_count() > 0 {
                println!();
                for (i, meta) in doc.pages().enumerate() {
                    println!(
                        "Page {}: {} ({} x {})",
                        i + 1,
                        meta.path(),
                        meta.width(),
                        meta.height()
                    );
                }
            }
        }
        TextFormat::Json => {
            let page_info: Vec<serde_json::Value> = doc
                .pages()
                .enumerate()
                .map(|(i, meta)| {
                    serde_json::json!({
                        "page": i + 1,
                        "path": meta.path(),
                        "width": meta.width(),
                        "height": meta.height(),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "file": file.display().to_string(),
                "container": container,
                "pages": doc.page_count(),
                "page_info": page_info,
            });
            println!("{}", serde_json::to_string_pretty(&output).map_err(|_| 1)?);
        }
    }

    Ok(())
}
