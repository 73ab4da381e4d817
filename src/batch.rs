//! Batch processing of payment requests from CSV.
//!
//! Requests are read one row at a time, run through the selected payment
//! method, and written out immediately in input order. Only counters are
//! kept between rows.

use crate::amount::Amount;
use crate::error::Result;
use crate::kind::PaymentKind;
use crate::request::PaymentRecord;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Output columns, in order.
pub const OUTPUT_HEADER: [&str; 3] = ["method", "amount", "confirmation"];

/// One output row: a processed request and its confirmation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedPayment {
    #[serde(rename = "method")]
    pub kind: PaymentKind,
    pub amount: Amount,
    pub confirmation: String,
}

/// Streams payment requests into confirmations.
///
/// Invalid rows are logged and skipped; they never abort the batch.
#[derive(Debug, Default)]
pub struct PaymentBatch {
    processed: usize,
    skipped: usize,
}

impl PaymentBatch {
    /// Creates a batch with zeroed counters.
    pub fn new() -> Self {
        PaymentBatch::default()
    }

    /// Reads requests with header `method,amount` from `reader` and writes
    /// one `method,amount,confirmation` row per valid request to `writer`.
    ///
    /// The header is always written, even when no row is valid.
    /// Invalid records are logged at warn level and skipped.
    pub fn process_csv<R: Read, W: Write>(&mut self, reader: R, writer: W) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer.write_record(OUTPUT_HEADER)?;

        for (row_idx, result) in csv_reader.deserialize::<PaymentRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    self.skipped += 1;
                    continue;
                }
            };

            match record.parse(row_num) {
                Ok(request) => {
                    let payment = ProcessedPayment {
                        kind: request.kind,
                        amount: request.amount,
                        confirmation: request.process(),
                    };
                    debug!("Row {}: {}", row_num, payment.confirmation);
                    csv_writer.serialize(&payment)?;
                    self.processed += 1;
                }
                Err(e) => {
                    warn!("{}", e);
                    self.skipped += 1;
                }
            }
        }

        csv_writer.flush()?;

        info!(
            "Processed {} payment(s), skipped {} row(s)",
            self.processed, self.skipped
        );

        Ok(())
    }

    /// Number of rows written so far.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Number of rows that could not be processed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(csv: &str) -> (PaymentBatch, String) {
        let mut batch = PaymentBatch::new();
        let mut out = Vec::new();
        batch.process_csv(Cursor::new(csv), &mut out).unwrap();
        (batch, String::from_utf8(out).unwrap())
    }

    fn read_back(output: &str) -> Vec<ProcessedPayment> {
        csv::Reader::from_reader(output.as_bytes())
            .deserialize::<ProcessedPayment>()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_processes_all_methods_in_order() {
        let csv = "method,amount\npix,1234.567\ncredit_card,10.5\nboleto,0\n";

        let (batch, output) = run(csv);
        let rows = read_back(&output);
        let kinds: Vec<_> = rows.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            [PaymentKind::Pix, PaymentKind::CreditCard, PaymentKind::Boleto]
        );
        assert_eq!(batch.processed(), 3);
        assert_eq!(batch.skipped(), 0);
        assert_eq!(rows[0].confirmation, "Pagamento com Pix: R$1234.57");
        assert_eq!(rows[0].amount.to_string(), "1234.57");
    }

    #[test]
    fn test_skips_invalid_rows() {
        let csv = r#"method,amount
pix,5
paypal,5
boleto,-1
credit_card,abc
credit_card,
credit_card,1_000
boleto,2.5"#;

        let (batch, output) = run(csv);
        let rows = read_back(&output);
        assert_eq!(rows.len(), 2);
        assert_eq!(batch.processed(), 2);
        assert_eq!(batch.skipped(), 5);
        assert_eq!(rows[1].amount.to_string(), "2.50");
    }

    #[test]
    fn test_missing_column_is_skipped() {
        let (batch, _) = run("method,amount\npix\nboleto,1\n");
        assert_eq!(batch.processed(), 1);
        assert_eq!(batch.skipped(), 1);
    }

    #[test]
    fn test_output_format() {
        let (_, output) = run("method,amount\n pix , 3 \n");
        assert_eq!(
            output,
            "method,amount,confirmation\npix,3.00,Pagamento com Pix: R$3.00\n"
        );
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let (batch, output) = run("method,amount\n");
        assert_eq!(output, "method,amount,confirmation\n");
        assert_eq!(batch.processed(), 0);
    }

    #[test]
    fn test_rows_are_written_as_they_are_read() {
        // the sink fails on its second write; rows must already be flowing by then
        struct FailAfter(usize);

        impl Write for FailAfter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if self.0 == 0 {
                    return Err(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
                }
                self.0 -= 1;
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let rows: String = (0..10_000).map(|i| format!("pix,{}\n", i)).collect();
        let csv = format!("method,amount\n{}", rows);

        let mut batch = PaymentBatch::new();
        let result = batch.process_csv(Cursor::new(csv), FailAfter(1));
        assert!(result.is_err());
        assert!(batch.processed() < 10_000);
    }

    #[test]
    fn test_counters_accumulate_across_inputs() {
        let mut batch = PaymentBatch::new();
        let mut out = Vec::new();
        batch
            .process_csv(Cursor::new("method,amount\npix,1\n"), &mut out)
            .unwrap();
        batch
            .process_csv(Cursor::new("method,amount\nboleto,2\nx,1\n"), &mut out)
            .unwrap();
        assert_eq!(batch.processed(), 2);
        assert_eq!(batch.skipped(), 1);
    }
}
