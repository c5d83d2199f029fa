use assert_matches::assert_matches;

use snippy_jobs::domain::{LocalSample, RemoteSample};
use snippy_jobs::error::SnippyJobsError;
use snippy_jobs::table::SampleTable;

#[test]
fn header_labels_are_ignored() {
    let data = "whatever\ta\tb\tc\td\nS1\t/a/f1.fq\t/a/r1.fq\t/out\t/a/ref.fa\n";
    let rows = SampleTable::from_reader::<LocalSample, _>(data.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sample_id, "S1");
    assert_eq!(rows[0].fwd_read.as_str(), "/a/f1.fq");
    assert_eq!(rows[0].rev_read.as_str(), "/a/r1.fq");
    assert_eq!(rows[0].outdir.as_str(), "/out");
    assert_eq!(rows[0].reference.as_str(), "/a/ref.fa");
}

#[test]
fn remote_rows_keep_file_order_and_duplicates() {
    let data = "sample_id\tfastq_dir\toutdir\treference\n\
                S2\t/fq\t/out\t/ref.fa\n\
                S1\t/fq\t/out\t/ref.fa\n\
                S2\t/fq2\t/out\t/ref.fa\n";
    let rows = SampleTable::from_reader::<RemoteSample, _>(data.as_bytes()).unwrap();
    let ids: Vec<_> = rows.iter().map(|row| row.sample_id.as_str()).collect();
    assert_eq!(ids, ["S2", "S1", "S2"]);
    assert_eq!(rows[2].fastq_dir.as_str(), "/fq2");
}

#[test]
fn header_only_table_is_empty() {
    let data = "sample_id\tfastq_dir\toutdir\treference\n";
    let rows = SampleTable::from_reader::<RemoteSample, _>(data.as_bytes()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn short_row_is_parse_error() {
    let data = "sample_id\tfwd\trev\toutdir\treference\nS1\t/a/f1.fq\t/a/r1.fq\n";
    let err = SampleTable::from_reader::<LocalSample, _>(data.as_bytes()).unwrap_err();
    assert_matches!(err, SnippyJobsError::TableParse(_));
}

#[test]
fn local_schema_rejects_remote_rows() {
    let data = "sample_id\tfastq_dir\toutdir\treference\nS2\t/fq\t/out\t/ref.fa\n";
    let err = SampleTable::from_reader::<LocalSample, _>(data.as_bytes()).unwrap_err();
    assert_matches!(err, SnippyJobsError::TableParse(_));
}

#[test]
fn missing_file_is_read_error() {
    let temp = tempfile::tempdir().unwrap();
    let path = camino::Utf8PathBuf::from_path_buf(temp.path().join("nope.tsv")).unwrap();
    let err = SampleTable::load::<LocalSample>(&path).unwrap_err();
    assert_matches!(err, SnippyJobsError::TableRead { .. });
}
