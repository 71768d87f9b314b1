use crate::error::RecordError;
use crate::number::NumberMode;

const FIELD_DELIMITER: u8 = b';';

/// Splits `station;value` at the first delimiter.
#[inline]
pub fn split_record(record: &[u8]) -> Result<(&[u8], &[u8]), RecordError> {
    let sep = memchr::memchr(FIELD_DELIMITER, record).ok_or(RecordError::MissingDelimiter)?;
    Ok((&record[..sep], &record[sep + 1..]))
}

/// Returns the station key and the parsed measurement of one record.
#[inline]
pub fn parse_record(record: &[u8], mode: NumberMode) -> Result<(&[u8], f64), RecordError> {
    let (station, value) = split_record(record)?;
    Ok((station, mode.parse(value)?))
}
