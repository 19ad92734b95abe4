use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use clap::ArgMatches;

use crate::error::Error;
use crate::partition::Partition;

pub fn extract_optional_str_arg(matches: &ArgMatches, arg_name: &str) -> Option<String> {
    matches.value_of(arg_name).map(|s| s.to_string())
}

pub fn extract_boolean_flag(matches: &ArgMatches, arg_name: &str) -> bool {
    matches.is_present(arg_name)
}

fn parse_numeric<T>(arg_name: &str, value: &str) -> Result<T, String> where T: FromStr, T::Err: fmt::Display {
    value.trim()
         .parse::<T>()
         .map_err(|why| format!("failed to parse the argument {} from {}: {}", arg_name, value, why))
}

pub fn extract_numeric_arg<T>(matches: &ArgMatches, arg_name: &str) -> Result<T, String> where T: FromStr, T::Err: fmt::Display {
    match matches.value_of(arg_name) {
        Some(value) => parse_numeric(arg_name, value),
        None => Err(format!("the argument {} is required", arg_name))
    }
}

pub fn extract_optional_numeric_arg<T>(matches: &ArgMatches, arg_name: &str) -> Result<Option<T>, String> where T: FromStr, T::Err: fmt::Display {
    match matches.value_of(arg_name) {
        Some(value) => parse_numeric(arg_name, value).map(Some),
        None => Ok(None)
    }
}

/// Opens `path` for writing, truncating it, or stdout when `path` is None.
pub fn get_output_writer(path: Option<&str>) -> Result<Box<dyn Write>, Error> {
    match path {
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
        Some(path) => {
            let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)
                                         .map_err(|io_error| Error::IO { why: format!("failed to create {}", path), io_error })?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Writes one partition per line and returns the number of partitions written.
/// Stops after `limit` partitions when a limit is given.
pub fn write_partitions<W, I>(writer: &mut W, partitions: I, limit: Option<usize>) -> Result<usize, Error>
    where W: Write, I: Iterator<Item=Partition> {
    let mut num_written = 0usize;
    for partition in partitions.take(limit.unwrap_or(usize::max_value())) {
        writer.write_fmt(format_args!("{}\n", partition))?;
        num_written += 1;
    }
    writer.flush()?;
    Ok(num_written)
}

#[cfg(test)]
mod tests {
    use std::fs::OpenOptions;
    use std::io::{BufRead, BufReader};

    use tempfile::NamedTempFile;

    use crate::strategy::{enumerate_partitions, Strategy};

    use super::{get_output_writer, parse_numeric, write_partitions};

    #[test]
    fn test_write_partitions() {
        let mut buf = Vec::new();
        let num_written = write_partitions(&mut buf, enumerate_partitions(4, Strategy::AscendingBaseline).unwrap(), None)
            .unwrap();
        assert_eq!(num_written, 5);
        assert_eq!(String::from_utf8(buf).unwrap(), "1 1 1 1\n1 1 2\n1 3\n2 2\n4\n");

        let mut buf = Vec::new();
        write_partitions(&mut buf, enumerate_partitions(4, Strategy::Multiset).unwrap(), Some(2)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4^1\n3^1 1^1\n");

        let mut buf = Vec::new();
        write_partitions(&mut buf, enumerate_partitions(0, Strategy::Bounded).unwrap(), None).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "(empty)\n");
    }

    #[test]
    fn test_write_partitions_to_file() {
        let out_path = NamedTempFile::new().unwrap().into_temp_path();
        {
            let mut writer = get_output_writer(out_path.to_str()).unwrap();
            let num_written = write_partitions(&mut writer, enumerate_partitions(10, Strategy::Reduction).unwrap(), Some(30))
                .unwrap();
            assert_eq!(num_written, 30);
        }
        let buf = BufReader::new(OpenOptions::new().read(true).open(&out_path).unwrap());
        let lines: Vec<String> = buf.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 30);
        for line in lines.iter() {
            let sum: usize = line.split_whitespace().map(|t| t.parse::<usize>().unwrap()).sum();
            assert_eq!(sum, 10);
        }
        assert_eq!(lines[0], "1 1 1 1 1 1 1 1 1 1");
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric::<i64>("n", " -4 "), Ok(-4));
        assert_eq!(parse_numeric::<usize>("limit", "12"), Ok(12));
        assert!(parse_numeric::<usize>("limit", "twelve").is_err());
    }
}
