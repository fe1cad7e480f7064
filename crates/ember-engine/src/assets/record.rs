use std::path::Path;

use super::file::AssetFile;
use crate::error::AssetError;

/// File extension used for record files.
pub const RECORD_EXTENSION: &str = "pdata";

/// Serialization into the engine's minimal text persistence format: an
/// ordered list of strings, one entry per line on disk. This is not a
/// full object dump; implementors persist only what they need to be
/// reconstructed.
pub trait Record {
    fn write_record(&self) -> Vec<String>;
}

/// Writes a record to `<path>.pdata`.
pub fn write_record_file(path: impl AsRef<Path>, record: &dyn Record) -> Result<(), AssetError> {
    let path = path.as_ref().with_extension(RECORD_EXTENSION);
    std::fs::write(path, record.write_record().join("\n"))?;
    Ok(())
}

/// Reads back the entries of a record file. Fails when the file is
/// missing.
pub fn read_record_file(path: impl AsRef<Path>) -> Result<Vec<String>, AssetError> {
    let file = AssetFile::open(path.as_ref())?;
    Ok(file.read_to_string()?.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct Pair;
    impl Record for Pair {
        fn write_record(&self) -> Vec<String> {
            vec!["first".into(), "second".into()]
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ember-record-{}-{name}", std::process::id()))
    }

    #[test]
    fn record_files_round_trip() {
        let base = temp_path("pair");
        write_record_file(&base, &Pair).unwrap();

        let stored = base.with_extension(RECORD_EXTENSION);
        let entries = read_record_file(&stored).unwrap();
        assert_eq!(entries, ["first", "second"]);

        std::fs::remove_file(stored).unwrap();
    }

    #[test]
    fn reading_a_missing_record_fails() {
        let err = read_record_file(temp_path("absent")).unwrap_err();
        assert!(matches!(err, AssetError::Missing { .. }));
    }
}
