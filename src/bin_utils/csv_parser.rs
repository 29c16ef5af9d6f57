use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::account::AccountId;

#[derive(Debug, Deserialize)]
pub struct AccountRow {
    pub id: AccountId,
    pub owner: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

/// Parses an `id,owner,balance` account list in CSV format, yielding each
/// row with the line it started on.
pub struct CsvAccountParser<R> {
    iter: DeserializeRecordsIntoIter<R, AccountRow>,
}

impl<R> CsvAccountParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(source);
        // read the header up front so positions point at data rows
        reader.headers()?;

        Ok(Self {
            iter: reader.into_deserialize(),
        })
    }
}

impl<R> Iterator for CsvAccountParser<R>
where
    R: Read,
{
    type Item = (u64, Result<AccountRow, csv::Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_rows() {
        let input = "id, owner, balance\n001, Juan Pérez, 1000.00\n002,María García,abc\n";
        let rows: Vec<_> = CsvAccountParser::new(input.as_bytes()).unwrap().collect();
        assert_eq!(rows.len(), 2);

        let (line, row) = &rows[0];
        assert_eq!(*line, 2);
        let row = row.as_ref().unwrap();
        assert_eq!(row.id, "001");
        assert_eq!(row.owner, "Juan Pérez");
        assert_eq!(row.balance, dec!(1000.00));

        assert_eq!(rows[1].0, 3);
        assert!(rows[1].1.is_err());
    }
}
