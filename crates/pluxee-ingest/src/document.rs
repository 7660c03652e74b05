//! Semi-structured document extraction.
//!
//! Word rosters have no tabular layout, just a stream of paragraphs where a
//! person's name, CPF and dates appear on nearby lines in no fixed order.
//! A single-pass state machine classifies each line by elimination and
//! flushes a person once the next name shows up.

use chrono::NaiveDate;

use pluxee_model::RawPersonRecord;
use pluxee_normalize::{digits_only, find_dmy_substring, parse_fuzzy};

/// CPF-shaped lines carry this many digits once punctuation is stripped.
const CPF_DIGITS_MIN: usize = 9;
const CPF_DIGITS_MAX: usize = 14;

/// Extract person records from ordered, non-empty, trimmed paragraph lines.
///
/// Per line:
/// - a `DD/MM/YY[YY]`-shaped substring is collected as a birth-date
///   candidate for the person being accumulated;
/// - otherwise, a line whose digit content has CPF-like length becomes the
///   CPF, if none is set yet;
/// - everything else is a name line: it completes the current person when
///   both name and CPF are present and starts the next one. A second
///   name-like line before any CPF is dropped silently — a document that
///   interleaves unrecognizable fields between name and CPF loses them.
///
/// The last accumulated person is flushed under the same completion rule.
pub fn extract_document<I, S>(lines: I) -> Vec<RawPersonRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut current = Accumulator::default();

    for line in lines {
        let line = line.as_ref();
        if let Some(date) = find_dmy_substring(line) {
            current.dates.push(date);
            continue;
        }
        let digits = digits_only(line);
        if (CPF_DIGITS_MIN..=CPF_DIGITS_MAX).contains(&digits.len()) {
            if current.cpf.is_empty() {
                current.cpf = digits;
            }
            continue;
        }
        // Name-like by elimination.
        if !current.name.is_empty() && !current.cpf.is_empty() {
            records.push(current.complete());
            current = Accumulator {
                name: line.to_string(),
                ..Accumulator::default()
            };
        } else if current.name.is_empty() {
            current.name = line.to_string();
        } else {
            tracing::debug!(line, "dropping unclassifiable line before CPF");
        }
    }

    if !current.name.is_empty() && !current.cpf.is_empty() {
        records.push(current.complete());
    }

    records
}

#[derive(Debug, Default)]
struct Accumulator {
    name: String,
    cpf: String,
    dates: Vec<String>,
}

impl Accumulator {
    /// Close the accumulated person, electing the earliest parseable date
    /// candidate as the birth date. No candidate parsing → no birth date.
    fn complete(self) -> RawPersonRecord {
        let mut parsed: Vec<(NaiveDate, String)> = self
            .dates
            .into_iter()
            .filter_map(|raw| parse_fuzzy(&raw).map(|date| (date, raw)))
            .collect();
        parsed.sort_by_key(|(date, _)| *date);
        let birth = parsed.into_iter().next().map(|(_, raw)| raw);

        RawPersonRecord {
            name: self.name,
            cpf: self.cpf,
            birth_date_candidates: birth.into_iter().collect(),
        }
    }
}
