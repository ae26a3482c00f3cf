use anyhow::Result;
use serde::Serialize;
use uvvis_core::format::FormatProfile;
use uvvis_core::ContainerKind;

#[derive(Debug, Serialize)]
pub struct FormatInfo {
    pub kind: ContainerKind,
    pub extension: String,
    pub description: String,
    pub profile: &'static FormatProfile,
}

/// List the container kinds this binary can read.
pub fn formats_command(json: bool) -> Result<()> {
    let entries: Vec<FormatInfo> = ContainerKind::ALL
        .into_iter()
        .map(|kind| {
            let description = match kind {
                ContainerKind::MultiSpectrum => {
                    "Multi-spectrum file; one spectrum per absorbance header".to_string()
                }
                ContainerKind::SingleSpectrum => {
                    "Single-spectrum file; optional sample name".to_string()
                }
            };
            FormatInfo {
                kind,
                extension: format!(".{}", kind.extension()),
                description,
                profile: FormatProfile::for_kind(kind),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Formats:");
    for entry in entries {
        println!("- {}: {}", entry.extension, entry.description);
        for variant in entry.profile.variants {
            println!(
                "    header {:?} ({} bytes), data at +{}",
                variant.label,
                variant.marker.len(),
                variant.data_offset
            );
        }
    }

    Ok(())
}
