//! CSV export of the claims list

use chrono::NaiveDate;

use core_kernel::Timezone;
use crate::claim::Claim;
use crate::error::ClaimError;

/// Column headings of the export
pub const CSV_HEADER: [&str; 6] = ["Claim ID", "Customer", "Type", "Status", "Amount", "Date"];

/// Writes one row per claim, in the given order
///
/// The date column is the creation date in `tz` as `yyyy-MM-dd`; amounts
/// carry no trailing zeros. Every record, the last included, ends in `\n`.
pub fn export_csv(claims: &[Claim], tz: &Timezone) -> Result<String, ClaimError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(export_error)?;
    for claim in claims {
        let amount = claim.amount.plain_amount();
        let date = tz.local_date(claim.created_at).format("%Y-%m-%d").to_string();
        writer
            .write_record([
                claim.claim_number.as_str(),
                claim.customer_name.as_str(),
                claim.claim_type.as_str(),
                claim.status.as_str(),
                amount.as_str(),
                date.as_str(),
            ])
            .map_err(export_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ClaimError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ClaimError::Export(e.to_string()))
}

/// Download name for an export taken on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("claims-export-{}.csv", date.format("%Y-%m-%d"))
}

fn export_error(error: csv::Error) -> ClaimError {
    ClaimError::Export(error.to_string())
}
