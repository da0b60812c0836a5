//! CSV input reading
//!
//! Both input files are comma separated, double-quote quoted, and start with a
//! header row that is skipped. Rows are read lazily in file order and only the
//! positional field count is checked. Cells that are not valid UTF-8 are decoded
//! lossily rather than rejected.

use crate::constants::columns;
use crate::error::AppError;
use crate::importer::models::{Credentials, FieldValue, NewTeam, PlayerRow, TeamRow};
use csv::ByteRecord;
use std::fs::File;
use std::path::Path;

/// Lazy sequence of data rows from one input file.
pub struct RowReader {
    path: String,
    records: csv::ByteRecordsIntoIter<File>,
}

impl RowReader {
    /// Opens `path`. Fails with [`AppError::InputFile`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let display_path = path.to_string_lossy().to_string();
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b',')
            .quote(b'"')
            .flexible(true)
            .from_path(path)
            .map_err(|e| AppError::input_file(display_path.clone(), e))?;

        Ok(RowReader {
            path: display_path,
            records: reader.into_byte_records(),
        })
    }

    /// Reads the next row and checks it has at least `expected` fields.
    fn next_with_fields(&mut self, expected: usize) -> Option<Result<ByteRecord, AppError>> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(AppError::Csv(e))),
        };

        if record.len() < expected {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Some(Err(AppError::row_too_short(
                self.path.clone(),
                line,
                expected,
                record.len(),
            )));
        }

        Some(Ok(record))
    }
}

impl Iterator for RowReader {
    type Item = Result<ByteRecord, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_fields(0)
    }
}

fn field(record: &ByteRecord, index: usize) -> String {
    record
        .get(index)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

/// Player rows: firstName, lastName, phone, password, team, login.
pub struct PlayerRows {
    reader: RowReader,
}

impl PlayerRows {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        Ok(PlayerRows {
            reader: RowReader::open(path)?,
        })
    }

}

impl Iterator for PlayerRows {
    type Item = Result<PlayerRow, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.reader.next_with_fields(columns::PLAYER_FIELD_COUNT)? {
            Ok(record) => record,
            Err(e) => return Some(Err(e)),
        };

        Some(Ok(PlayerRow {
            first_name: field(&record, columns::PLAYER_FIRST_NAME),
            last_name: field(&record, columns::PLAYER_LAST_NAME),
            phone: FieldValue::from_cell(&field(&record, columns::PLAYER_PHONE)),
            password: FieldValue::from_cell(&field(&record, columns::PLAYER_PASSWORD)),
            team: field(&record, columns::PLAYER_TEAM),
            login: FieldValue::from_cell(&field(&record, columns::PLAYER_LOGIN)),
        }))
    }
}

/// Team rows: name, (unused), ownerLogin, ownerPassword.
pub struct TeamRows {
    reader: RowReader,
    sport: String,
}

impl TeamRows {
    /// Opens a team file. Every team read from it is created for `sport`.
    pub fn open(path: impl AsRef<Path>, sport: impl Into<String>) -> Result<Self, AppError> {
        Ok(TeamRows {
            reader: RowReader::open(path)?,
            sport: sport.into(),
        })
    }

}

impl Iterator for TeamRows {
    type Item = Result<TeamRow, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.reader.next_with_fields(columns::TEAM_FIELD_COUNT)? {
            Ok(record) => record,
            Err(e) => return Some(Err(e)),
        };

        Some(Ok(TeamRow {
            team: NewTeam {
                name: field(&record, columns::TEAM_NAME),
                sport: self.sport.clone(),
            },
            owner: Credentials {
                login: field(&record, columns::TEAM_OWNER_LOGIN),
                password: field(&record, columns::TEAM_OWNER_PASSWORD),
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_header_row_is_skipped() {
        let file = csv_file("first,last,phone,password,team,login\nJane,Doe,,auto,Red,auto\n");

        let rows: Vec<PlayerRow> = PlayerRows::open(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first_name, "Jane");
        assert_eq!(rows[0].last_name, "Doe");
        assert_eq!(rows[0].phone, FieldValue::Given(String::new()));
        assert_eq!(rows[0].password, FieldValue::Auto);
        assert_eq!(rows[0].team, "Red");
        assert_eq!(rows[0].login, FieldValue::Auto);
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let file = csv_file(
            "first,last,phone,password,team,login\n\"Anne, Jr.\",Smith,auto,pw,\"Red, White\",asmith\n",
        );

        let rows: Vec<PlayerRow> = PlayerRows::open(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(rows[0].first_name, "Anne, Jr.");
        assert_eq!(rows[0].team, "Red, White");
        assert_eq!(rows[0].login, FieldValue::Given("asmith".to_string()));
    }

    #[test]
    fn test_rows_are_returned_in_file_order() {
        let file = csv_file("name,x,owner,pass\nA,,u1,p1\nB,,u1,p1\nC,,u2,p2\n");

        let names: Vec<String> = TeamRows::open(file.path(), "soccer")
            .unwrap()
            .map(|row| row.unwrap().team.name)
            .collect();

        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_team_row_columns() {
        let file = csv_file("name,league,owner,pass\nRed,ignored,coach1,pass1\n");

        let row = TeamRows::open(file.path(), "soccer")
            .unwrap()
            .next()
            .unwrap()
            .unwrap();

        assert_eq!(row.team.name, "Red");
        assert_eq!(row.team.sport, "soccer");
        assert_eq!(row.owner.login, "coach1");
        assert_eq!(row.owner.password, "pass1");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let file = csv_file("name,x,owner,pass\nRed,,coach1,pass1,extra,more\n");

        let row = TeamRows::open(file.path(), "soccer")
            .unwrap()
            .next()
            .unwrap()
            .unwrap();

        assert_eq!(row.team.name, "Red");
        assert_eq!(row.owner.password, "pass1");
    }

    #[test]
    fn test_short_row_is_an_error() {
        let file = csv_file("name,x,owner,pass\nRed,,coach1,pass1\nBlue,,coach2\n");

        let mut rows = TeamRows::open(file.path(), "soccer").unwrap();
        assert!(rows.next().unwrap().is_ok());

        match rows.next().unwrap() {
            Err(AppError::RowTooShort {
                row,
                expected,
                found,
                ..
            }) => {
                assert_eq!(row, 3);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("Expected RowTooShort, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("players.csv");

        let result = PlayerRows::open(&missing);
        assert!(matches!(result, Err(AppError::InputFile { .. })));
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let file = csv_file("first,last,phone,password,team,login\n");

        assert_eq!(PlayerRows::open(file.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_utf8_row_does_not_stop_reading() {
        let mut content = b"first,last,phone,password,team,login\n".to_vec();
        content.extend_from_slice(b"J\xe9r\xf4me,Doe,,auto,Red,auto\n");
        content.extend_from_slice(b"Jane,Doe,,auto,Red,auto\n");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&content).unwrap();
        file.flush().unwrap();

        let rows: Vec<PlayerRow> = PlayerRows::open(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].first_name, "J\u{FFFD}r\u{FFFD}me");
        assert_eq!(rows[0].team, "Red");
        assert_eq!(rows[1].first_name, "Jane");
    }

    #[test]
    fn test_raw_rows_are_not_length_checked() {
        let file = csv_file("a,b\n1\n1,2,3\n");

        let lengths: Vec<usize> = RowReader::open(file.path())
            .unwrap()
            .map(|record| record.unwrap().len())
            .collect();

        assert_eq!(lengths, vec![1, 3]);
    }
}
