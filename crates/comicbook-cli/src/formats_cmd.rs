use comicbook::comicbook_archive::ContainerKind;
use comicbook::{MIME_TYPES, supported_extensions};

use crate::cli::TextFormat;

/// Container formats with the comic flavor conventionally stored in each.
const CONTAINERS: [(ContainerKind, &str); 5] = [
    (ContainerKind::Zip, "CBZ"),
    (ContainerKind::SevenZ, "CB7"),
    (ContainerKind::Rar, "CBR"),
    (ContainerKind::Tar, "CBT"),
    (ContainerKind::TarGz, "CBT (gzip)"),
];

fn container_enabled(kind: ContainerKind) -> bool {
    match kind {
        ContainerKind::Rar => cfg!(feature = "rar"),
        _ => true,
    }
}

pub fn run(format: &TextFormat) -> Result<(), i32> {
    let extensions: Vec<String> = supported_extensions()
        .iter()
        .map(|e| e.to_string())
        .collect();

    match format {
        TextFormat::Text => {
            println!("Containers:");
            for (kind, flavor) in CONTAINERS {
                if container_enabled(kind) {
                    println!("  {kind} ({flavor})");
                } else {
                    println!("  {kind} ({flavor}) [not compiled in]");
                }
            }
            println!();
            println!("Image extensions:");
            println!("  {}", extensions.join(", "));
            println!();
            println!("MIME types:");
            for mime in MIME_TYPES {
                println!("  {mime}");
            }
        }
        TextFormat::Json => {
            let containers: Vec<serde_json::Value> = CONTAINERS
                .into_iter()
                .map(|(kind, flavor)| {
                    serde_json::json!({
                        "format": kind.to_string(),
                        "flavor": flavor,
                        "enabled": container_enabled(kind),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "containers": containers,
                "image_extensions": extensions,
                "mime_types": MIME_TYPES,
            });
            println!("{}", serde_json::to_string_pretty(&output).map_err(|_| 1)?);
        }
    }

    Ok(())
}
