use std::path::Path;

use crate::shared::{ProgressReporter, open_document, resolve_pages};

pub fn run(file: &Path, pages: Option<&str>, output_dir: Option<&Path>) -> Result<(), i32> {
    let doc = open_document(file)?;
    let positions = resolve_pages(pages, doc.page_count())?;

    let out_dir = output_dir.unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(out_dir).map_err(|e| {
        eprintln!("Error: cannot create {}: {e}", out_dir.display());
        1
    })?;

    let progress = ProgressReporter::new(positions.len());
    for (i, &idx) in positions.iter().enumerate() {
        progress.report(i + 1);

        let pixmap = doc.decode_page(idx).map_err(|e| {
            eprintln!("Error decoding page {}: {e}", idx + 1);
            1
        })?;
        let (width, height) = (pixmap.width(), pixmap.height());
        let img = image::RgbaImage::from_raw(width, height, pixmap.into_data()).ok_or_else(
            || {
                eprintln!("Error: page {} pixel buffer size mismatch", idx + 1);
                1
            },
        )?;

        let out_path = out_dir.join(format!("page-{:03}.png", idx + 1));
        img.save_with_format(&out_path, image::ImageFormat::Png)
            .map_err(|e| {
                eprintln!("Error writing {}: {e}", out_path.display());
                1
            })?;
        println!("{}", out_path.display());
    }

    progress.finish();
    Ok(())
}
