//! Lenient, day-first-biased date parsing.
//!
//! Roster birth dates arrive in whatever shape the client typed: `1/2/90`,
//! `01-02-1990`, `1990-02-01`, `15 de maio de 1985`, or buried inside a
//! longer cell ("admitido em 03/04/1991"). Parsing is best effort and
//! substring-based; a false positive extracted from surrounding text is an
//! accepted risk. Failures are plain `None`, never panics.

use chrono::NaiveDate;

/// Output format demanded by the vendor layout.
const OUTPUT_FORMAT: &str = "%d/%m/%Y";

/// Two-digit years below this resolve to 2000s, others to 1900s.
const CENTURY_PIVOT: u32 = 70;

/// Normalize a free-text date to `DD/MM/YYYY`, falling back to `default`
/// for blank or unparseable input.
pub fn normalize_date(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default.to_string();
    }
    match parse_fuzzy(trimmed) {
        Some(date) => date.format(OUTPUT_FORMAT).to_string(),
        None => {
            tracing::debug!(value = trimmed, "unparseable date, using default");
            default.to_string()
        }
    }
}

/// Best-effort date extraction from free text, day-first biased.
///
/// Tried in order: separated numeric triple (`d/m/y`, `d-m-y`, `d.m.y`,
/// `d m y`, or year-first when the leading run has 4 digits), compact
/// 8-digit run (`DDMMYYYY`, then `YYYYMMDD`), and Portuguese or English
/// month names with the day on either side (`15 de maio de 1985`,
/// `May 15, 1985`).
pub fn parse_fuzzy(raw: &str) -> Option<NaiveDate> {
    let runs = digit_runs(raw);

    if let Some(date) = parse_separated_triple(raw, &runs) {
        return Some(date);
    }
    if let Some(date) = parse_compact(&runs) {
        return Some(date);
    }
    parse_month_name(raw, &runs)
}

/// Find the first `DD/MM/YY` or `DD/MM/YYYY`-shaped substring of a line.
///
/// This mirrors what the document extractor treats as a date marker; the
/// match is positional, with no boundary requirements around it.
pub fn find_dmy_substring(line: &str) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    for start in 0..len {
        // DD '/' MM '/' then 2 to 4 digits, greedy.
        if start + 8 > len {
            break;
        }
        if chars[start].is_ascii_digit()
            && chars[start + 1].is_ascii_digit()
            && chars[start + 2] == '/'
            && chars[start + 3].is_ascii_digit()
            && chars[start + 4].is_ascii_digit()
            && chars[start + 5] == '/'
            && chars[start + 6].is_ascii_digit()
            && chars[start + 7].is_ascii_digit()
        {
            // Year part takes 2 to 4 digits, greedy.
            let mut end = start + 8;
            while end < len && end < start + 10 && chars[end].is_ascii_digit() {
                end += 1;
            }
            return Some(chars[start..end].iter().collect());
        }
    }
    None
}

/// A maximal run of ASCII digits inside the input.
#[derive(Debug, Clone, Copy)]
struct DigitRun {
    start: usize,
    end: usize,
    value: u32,
    len: usize,
}

fn digit_runs(raw: &str) -> Vec<DigitRun> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, u32, usize)> = None;
    for (index, c) in raw.char_indices() {
        if let Some(digit) = c.to_digit(10) {
            current = match current {
                Some((start, value, len)) => {
                    Some((start, value.saturating_mul(10).saturating_add(digit), len + 1))
                }
                None => Some((index, digit, 1)),
            };
        } else if let Some((start, value, len)) = current.take() {
            runs.push(DigitRun {
                start,
                end: index,
                value,
                len,
            });
        }
    }
    if let Some((start, value, len)) = current {
        runs.push(DigitRun {
            start,
            end: raw.len(),
            value,
            len,
        });
    }
    runs
}

/// Three digit runs joined by a single `/`, `-`, `.` or space each.
fn parse_separated_triple(raw: &str, runs: &[DigitRun]) -> Option<NaiveDate> {
    for window in runs.windows(3) {
        let [a, b, c] = window else { continue };
        if !is_separator(raw, a.end, b.start) || !is_separator(raw, b.end, c.start) {
            continue;
        }
        if a.len > 4 || b.len > 2 || c.len > 4 {
            continue;
        }
        let candidate = if a.len == 4 {
            // Year-first (ISO-style): 1990-02-01.
            from_parts(a.value as i32, b.value, c.value)
        } else {
            resolve_day_first(a.value, b.value, c.value, c.len)
        };
        if candidate.is_some() {
            return candidate;
        }
    }
    None
}

/// A lone 8-digit run, read day-first then year-first.
fn parse_compact(runs: &[DigitRun]) -> Option<NaiveDate> {
    let run = runs.iter().find(|run| run.len == 8)?;
    let value = run.value;
    let (head, tail) = (value / 10_000, value % 10_000);
    // DDMMYYYY: head = ddmm, tail = yyyy.
    from_parts(tail as i32, head % 100, head / 100)
        // YYYYMMDD: head = yyyy, tail = mmdd.
        .or_else(|| from_parts(head as i32, tail / 100, tail % 100))
}

fn parse_month_name(raw: &str, runs: &[DigitRun]) -> Option<NaiveDate> {
    let lowered = raw.to_lowercase();
    let (month, name_start, name_end) = find_month_name(&lowered)?;
    let mut after = runs.iter().filter(|run| run.start >= name_end);
    // Day before the name ("15 de maio de 1985") or right after it
    // ("May 15, 1985").
    let day = match runs
        .iter()
        .rev()
        .find(|run| run.end <= name_start && run.len <= 2)
    {
        Some(day) => day,
        None => after.next().filter(|run| run.len <= 2)?,
    };
    let year = after.find(|run| run.start >= day.end && (run.len == 4 || run.len == 2))?;
    let year_value = if year.len == 2 {
        widen_year(year.value)
    } else {
        year.value as i32
    };
    from_parts(year_value, month, day.value)
}

/// Portuguese and English month names, full and three-letter forms.
const MONTH_NAMES: [(&str, u32); 25] = [
    ("janeiro", 1),
    ("fevereiro", 2),
    ("marco", 3),
    ("março", 3),
    ("abril", 4),
    ("maio", 5),
    ("junho", 6),
    ("julho", 7),
    ("agosto", 8),
    ("setembro", 9),
    ("outubro", 10),
    ("novembro", 11),
    ("dezembro", 12),
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

fn find_month_name(lowered: &str) -> Option<(u32, usize, usize)> {
    // Prefer full names so "marco" wins over the "mar" inside it.
    for (name, month) in MONTH_NAMES {
        if let Some(start) = lowered.find(name) {
            return Some((month, start, start + name.len()));
        }
    }
    // Three-letter abbreviations shared by both languages.
    const ABBREVIATIONS: [(&str, u32); 12] = [
        ("jan", 1),
        ("fev", 2),
        ("feb", 2),
        ("mar", 3),
        ("abr", 4),
        ("apr", 4),
        ("mai", 5),
        ("jun", 6),
        ("jul", 7),
        ("ago", 8),
        ("aug", 8),
        ("nov", 11),
    ];
    for (name, month) in ABBREVIATIONS {
        if let Some(start) = lowered.find(name) {
            return Some((month, start, start + name.len()));
        }
    }
    None
}

/// Day-first with a month/day swap retry, dateutil style.
fn resolve_day_first(a: u32, b: u32, year_raw: u32, year_len: usize) -> Option<NaiveDate> {
    let year = if year_len <= 2 {
        widen_year(year_raw)
    } else {
        year_raw as i32
    };
    from_parts(year, b, a).or_else(|| from_parts(year, a, b))
}

fn widen_year(two_digit: u32) -> i32 {
    if two_digit < CENTURY_PIVOT {
        (2000 + two_digit) as i32
    } else {
        (1900 + two_digit) as i32
    }
}

fn from_parts(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn is_separator(raw: &str, from: usize, to: usize) -> bool {
    if to != from + 1 {
        return false;
    }
    matches!(&raw[from..to], "/" | "-" | "." | " ")
}
