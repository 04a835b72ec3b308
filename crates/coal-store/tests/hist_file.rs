use coal_store::{Histogram, HistogramFile, StoreError, encode_histogram_file, write_histogram_file};

fn sample_histograms() -> Vec<Histogram> {
    vec![
        Histogram {
            name: "hCdPhiM_Baryon_Baryon".to_string(),
            centers: vec![0.5, 1.5, 2.5, 3.5],
            contents: vec![10.0, 20.0, 30.0, 40.0],
        },
        Histogram {
            name: "hRatio".to_string(),
            centers: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            contents: vec![0.2, 0.6, 0.27, 0.43, 0.24, 0.35, 0.36],
        },
    ]
}

#[test]
fn write_then_read_preserves_histograms() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("qa.cwh");
    let histograms = sample_histograms();
    write_histogram_file(&path, &histograms).expect("write");

    let file = HistogramFile::open(&path).expect("open");
    assert_eq!(file.names().collect::<Vec<_>>(), vec!["hCdPhiM_Baryon_Baryon", "hRatio"]);
    let ratio = file.histogram("hRatio").expect("hRatio");
    assert_eq!(ratio.nbins(), 7);
    assert_eq!(ratio.contents, histograms[1].contents);
}

#[test]
fn absent_histogram_is_not_found() {
    let file = HistogramFile::from_bytes(&encode_histogram_file(&sample_histograms()))
        .expect("open");
    assert!(file.contains("hRatio"));
    match file.histogram("hSdPhiP_Meson_Meson") {
        Err(StoreError::HistogramNotFound { name }) => {
            assert_eq!(name, "hSdPhiP_Meson_Meson");
        }
        other => panic!("expected HistogramNotFound, got {other:?}"),
    }
}

#[test]
fn histogram_total_sums_contents() {
    let histograms = sample_histograms();
    assert_eq!(histograms[0].total(), 100.0);
}

#[test]
fn bad_magic_is_rejected() {
    match HistogramFile::from_bytes(b"CWEVENT\0junk") {
        Err(StoreError::BadMagic { .. }) => {}
        other => panic!("expected BadMagic, got {other:?}"),
    }
}
