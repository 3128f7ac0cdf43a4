use std::fs;
use std::fs::File;

use csvmap::{Reader, Record, Writer};

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn roundtrip_preserves_header_columns() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("people.csv");

    let header = vec!["email".to_string(), "name".to_string()];
    let records = vec![
        record(&[
            ("name", "John"),
            ("email", "john@example.com"),
            ("age", "8"),
        ]),
        record(&[
            ("name", "Marie"),
            ("email", "marie@example.com"),
            ("age", "6"),
        ]),
    ];

    let mut wtr = Writer::new(csv::Writer::from_path(&path)?, header.clone());
    wtr.write_header()?;
    wtr.write_all(&records)?;
    drop(wtr);

    let mut rdr = Reader::from_reader(File::open(&path)?)?;
    assert_eq!(rdr.header(), header.as_slice());

    let reread = rdr.records().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(reread.len(), records.len());
    for (original, back) in records.iter().zip(&reread) {
        for col in &header {
            assert_eq!(original.get(col), back.get(col));
        }
        // "age" was not in the header, so it did not survive the trip.
        assert!(!back.contains_key("age"));
    }
    Ok(())
}

#[test]
fn reordering_and_filtering_columns() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let source = tmp.path().join("source.csv");
    let sink = tmp.path().join("sink.csv");
    fs::write(&source, "name,age,email\nJohn,8,john@example.com\n")?;

    let mut rdr = Reader::from_reader(File::open(&source)?)?;
    let mut wtr = Writer::new(
        csv::Writer::from_path(&sink)?,
        vec!["email".to_string(), "name".to_string()],
    );
    wtr.write_header()?;
    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
    wtr.write_all(&records)?;
    drop(wtr);

    assert_eq!(
        fs::read_to_string(&sink)?,
        "email,name\njohn@example.com,John\n"
    );
    Ok(())
}

#[test]
fn absent_key_writes_empty_string_but_short_record_reads_absent() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("partial.csv");

    let mut wtr = Writer::new(
        csv::Writer::from_path(&path)?,
        vec!["a".to_string(), "b".to_string()],
    );
    wtr.write_header()?;
    wtr.write_all(&[record(&[("a", "1")])])?;
    drop(wtr);

    // The writer zero-filled the missing column.
    assert_eq!(fs::read_to_string(&path)?, "a,b\n1,\n");

    // Re-reading sees that fill as a real, empty value.
    let mut rdr = Reader::from_reader(File::open(&path)?)?;
    let reread = rdr.read().expect("record")?;
    assert_eq!(reread["b"], "");

    // A record that is genuinely short yields no entry at all.
    fs::write(&path, "a,b\n1\n")?;
    let mut rdr = Reader::from_reader(File::open(&path)?)?;
    let short = rdr.read().expect("record")?;
    assert_eq!(short["a"], "1");
    assert!(!short.contains_key("b"));
    Ok(())
}
