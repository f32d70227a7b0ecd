//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::decode::{DecoderConfig, RecordReader};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{DecodeSummary, Record};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Decode { input } => self.decode(input.as_deref()),
            Commands::Fetch {
                url,
                headers,
                timeout,
            } => self.fetch(url, headers, *timeout),
        }
    }

    /// Decode a local file or standard input
    fn decode(&self, input: Option<&Path>) -> Result<()> {
        match input {
            Some(path) => {
                debug!("Decoding file {}", path.display());
                let file = File::open(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => Error::FileNotFound {
                        path: path.display().to_string(),
                    },
                    _ => Error::Io(e),
                })?;
                self.decode_reader(BufReader::new(file))
            }
            None => {
                debug!("Decoding standard input");
                self.decode_reader(io::stdin().lock())
            }
        }
    }

    /// Fetch a URL and decode the response body
    fn fetch(&self, url: &str, headers: &[String], timeout: Option<u64>) -> Result<()> {
        let client = HttpClient::new();

        let mut request = RequestConfig::new();
        for header in headers {
            let (name, value) = parse_header(header)?;
            request = request.header(name, value);
        }
        if let Some(seconds) = timeout {
            request = request.timeout(Duration::from_secs(seconds));
        }

        info!("Fetching {url}");
        let response = client.get_with_config(url, request)?;
        self.decode_reader(BufReader::new(response))
    }

    /// Decode from any buffered reader and write records to stdout
    fn decode_reader(&self, reader: impl BufRead) -> Result<()> {
        let records = RecordReader::with_config(reader, self.decoder_config()?)?;

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let mut summary = DecodeSummary::new();
        let started = Instant::now();

        for record in records {
            let record = record?;
            summary.add_record(record.len());
            write_record(&mut out, &record, self.cli.format)?;
        }

        summary.elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            "Decoded {} records ({} fields) in {}ms",
            summary.records, summary.fields, summary.elapsed_ms
        );

        if self.cli.summary {
            serde_json::to_writer(&mut out, &summary)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Build the decoder config from CLI flags
    fn decoder_config(&self) -> Result<DecoderConfig> {
        if !self.cli.delimiter.is_ascii() {
            return Err(Error::config("delimiter must be a single ASCII character"));
        }
        Ok(DecoderConfig::with_delimiter(self.cli.delimiter as u8))
    }
}

/// Render one record to the output stream
fn write_record(out: &mut impl Write, record: &Record, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            for field in record {
                write!(out, "|{field}")?;
            }
            writeln!(out, "|")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Parse a 'name: value' header argument
fn parse_header(raw: &str) -> Result<(&str, &str)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::config(format!("invalid header '{raw}': expected 'name: value'")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::config(format!("invalid header '{raw}': empty name")));
    }
    Ok((name, value.trim()))
}
