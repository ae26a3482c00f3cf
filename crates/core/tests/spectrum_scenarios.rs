mod support;

use std::fs;

use support::{place, ramp, wide_container, WIDE_DATA_OFFSET};
use tempfile::tempdir;
use uvvis_core::format::{WIDE_AU_HEADER, WIDE_SAMPLE_NAME};
use uvvis_core::services::{parse_container, read_spectra, CsvExporter, SpectrumExporter};
use uvvis_core::{BinaryContainer, ContainerKind, ExportShape, WavelengthRange};

#[test]
fn single_spectrum_ramp_at_offset_100_decodes_exactly() {
    let values = ramp(911);
    let bytes = wide_container(&[(100, values.clone())]);
    let container = BinaryContainer::new("ramp.SD", ContainerKind::SingleSpectrum, bytes);

    let set = parse_container(&container, &WavelengthRange::default()).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.export_shape(), ExportShape::SingleFile);

    let spectrum = &set.spectra[0];
    assert_eq!(spectrum.len(), 911);
    assert_eq!(spectrum.wavelengths.first(), Some(&190.0));
    assert_eq!(spectrum.wavelengths.last(), Some(&1100.0));
    assert!(spectrum.wavelengths.windows(2).all(|w| w[1] - w[0] == 1.0));
    assert_eq!(spectrum.absorbances, values);
    assert_eq!(spectrum.name, None);
}

#[test]
fn three_markers_yield_three_spectra_in_one_folder() {
    let tmp = tempdir().unwrap();
    let anchors = vec![(50, vec![0.1; 911]), (3000, vec![0.2; 911]), (6000, ramp(911))];
    let bytes = wide_container(&anchors);
    assert_eq!(bytes.len(), 6000 + WIDE_DATA_OFFSET + 911 * 8);
    let source = tmp.path().join("Kinetics.KD");
    fs::write(&source, &bytes).unwrap();

    let set = read_spectra(&source, &WavelengthRange::default()).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.name, "Kinetics");
    let indices: Vec<usize> = set.spectra.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    // First sample of each block sits before any later header overwrote it.
    assert_eq!(set.spectra[0].absorbances[0], 0.1);
    assert_eq!(set.spectra[1].absorbances[0], 0.2);
    assert_eq!(set.spectra[2].absorbances, ramp(911));

    let outcome = CsvExporter::default().export(&set).unwrap();
    assert_eq!(outcome.shape, ExportShape::Folder { count: 3 });
    assert_eq!(outcome.path, tmp.path().join("Kinetics"));
    let mut names: Vec<String> = fs::read_dir(&outcome.path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["1.csv", "2.csv", "3.csv"]);
}

#[test]
fn single_spectrum_picks_up_wide_sample_name() {
    let mut bytes = wide_container(&[(400, ramp(911))]);
    let name: Vec<u8> =
        "Sample A".encode_utf16().chain([0]).flat_map(|u| u.to_le_bytes()).collect();
    place(&mut bytes, 20, WIDE_SAMPLE_NAME);
    place(&mut bytes, 20 + WIDE_SAMPLE_NAME.len(), &name);
    assert!(20 + WIDE_SAMPLE_NAME.len() + name.len() < 400);

    let container = BinaryContainer::new("named.sd", ContainerKind::SingleSpectrum, bytes);
    let set = parse_container(&container, &WavelengthRange::default()).unwrap();
    assert_eq!(set.spectra[0].name.as_deref(), Some("Sample A"));
}

#[test]
fn multi_spectrum_with_one_block_exports_single_file() {
    let tmp = tempdir().unwrap();
    let range = WavelengthRange::new(250, 254).unwrap();
    let source = tmp.path().join("one.KD");
    fs::write(&source, wide_container(&[(0, vec![0.0, 0.5, 1.0, 1.5, 2.0])])).unwrap();

    let set = read_spectra(&source, &range).unwrap();
    let outcome = CsvExporter::default().export(&set).unwrap();
    assert_eq!(outcome.shape, ExportShape::SingleFile);
    assert_eq!(outcome.path, tmp.path().join("one.csv"));

    let body = fs::read_to_string(&outcome.path).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "Wavelength (nm),Absorbance (AU)");
    assert_eq!(lines[1], "250,0");
    assert_eq!(lines[5], "254,2");
    assert_eq!(lines.len(), 6);
}

#[test]
fn markers_inside_header_region_do_not_confuse_the_scan() {
    // A header fragment is not a match.
    let mut bytes = vec![0u8; 8];
    place(&mut bytes, 0, &WIDE_AU_HEADER[..6]);
    bytes.extend(wide_container(&[(0, vec![1.0, 2.0])]));
    let range = WavelengthRange::new(500, 501).unwrap();
    let container = BinaryContainer::new("frag.SD", ContainerKind::SingleSpectrum, bytes);
    let set = parse_container(&container, &range).unwrap();
    assert_eq!(set.spectra[0].absorbances, vec![1.0, 2.0]);
}
