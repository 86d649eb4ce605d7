use std::path::Path;

use comicbook::Document;

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, open_document, resolve_pages};

pub fn run(file: &Path, pages: Option<&str>, format: &OutputFormat) -> Result<(), i32> {
    let doc = open_document(file)?;
    let positions = resolve_pages(pages, doc.page_count())?;

    match format {
        OutputFormat::Text => write_text(&doc, &positions),
        OutputFormat::Json => write_json(&doc, &positions),
        OutputFormat::Csv => write_csv(&doc, &positions),
    }
}

fn page_meta(doc: &Document, idx: usize) -> Result<&comicbook::PageMeta, i32> {
    doc.page(idx).map_err(|e| {
        eprintln!("Error reading page {}: {e}", idx + 1);
        1
    })
}

fn write_text(doc: &Document, positions: &[usize]) -> Result<(), i32> {
    println!("page\tpath\twidth\theight");
    for &idx in positions {
        let meta = page_meta(doc, idx)?;
        println!(
            "{}\t{}\t{}\t{}",
            idx + 1,
            meta.path(),
            meta.width(),
            meta.height()
        );
    }
    Ok(())
}

fn write_json(doc: &Document, positions: &[usize]) -> Result<(), i32> {
    let mut rows = Vec::new();
    for &idx in positions {
        let meta = page_meta(doc, idx)?;
        rows.push(serde_json::json!({
            "page": idx + 1,
            "path": meta.path(),
            "width": meta.width(),
            "height": meta.height(),
        }));
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&rows).map_err(|_| 1)?
    );
    Ok(())
}

fn write_csv(doc: &Document, positions: &[usize]) -> Result<(), i32> {
    println!("page,path,width,height");
    for &idx in positions {
        let meta = page_meta(doc, idx)?;
        println!(
            "{},{},{},{}",
            idx + 1,
            csv_escape(meta.path()),
            meta.width(),
            meta.height()
        );
    }
    Ok(())
}
