//! Regenerates the planet modules under `src/vsop87/` from the raw VSOP87D files.
//!
//! ```text
//! cargo run --example vsop87_gen -- <raw dir> <output dir>
//! ```
//! The raw directory holds `VSOP87D.mer` … `VSOP87D.nep` as distributed by the Bureau des
//! longitudes. Every term of every file is kept, so the output is the complete series.
//! Amplitudes are rescaled to the 1e-8 units the library stores.
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{env, fs};

use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
enum GenError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}:{line}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Module name, display name, raw file suffix.
const PLANETS: [(&str, &str, &str); 8] = [
    ("mercury", "Mercury", "mer"),
    ("venus", "Venus", "ven"),
    ("earth", "Earth", "ear"),
    ("mars", "Mars", "mar"),
    ("jupiter", "Jupiter", "jup"),
    ("saturn", "Saturn", "sat"),
    ("uranus", "Uranus", "ura"),
    ("neptune", "Neptune", "nep"),
];

const COORDINATES: [char; 3] = ['L', 'B', 'R'];

const UNITS: &str = "Amplitudes are in units of 1e-8 rad (L, B) and 1e-8 AU (R).";

/// One term, already rendered as Rust float literals.
#[derive(Debug, Clone, PartialEq)]
struct TermLiteral {
    a: String,
    b: String,
    c: String,
}

/// Terms of one planet, indexed by coordinate (L, B, R) then by power of `τ`.
#[derive(Debug, Default)]
struct RawSeries {
    coordinates: [Vec<Vec<TermLiteral>>; 3],
}

impl RawSeries {
    fn total_terms(&self) -> usize {
        self.coordinates.iter().flatten().map(Vec::len).sum()
    }
}

/// Render a float as a Rust literal, keeping the digits of the source.
fn float_literal(raw: &str) -> Option<String> {
    raw.parse::<f64>().ok()?;
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    Some(match raw.split_once('.') {
        None => format!("{raw}.0"),
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            let int = if int.is_empty() || int == "-" {
                format!("{int}0")
            } else {
                int.to_string()
            };
            format!("{int}.{}", if frac.is_empty() { "0" } else { frac })
        }
    })
}

/// Rescale a raw amplitude (rad or AU, 11 decimals) to units of 1e-8.
fn amplitude_literal(raw: &str) -> Option<String> {
    let value: f64 = raw.parse().ok()?;
    let thousandths = (value.abs() * 1e11).round() as i64;
    let sign = if value < 0.0 { "-" } else { "" };
    let frac = format!("{:03}", thousandths % 1000);
    let frac = frac.trim_end_matches('0');
    Some(format!(
        "{sign}{}.{}",
        thousandths / 1000,
        if frac.is_empty() { "0" } else { frac }
    ))
}

/// Parse one `VSOP87D.*` file.
///
/// A block starts with a `VSOP87 VERSION D…` header whose sixth field is the coordinate
/// (1 = L, 2 = B, 3 = R), eighth the power `*T**k` and ninth the term count. Every other line is
/// a term whose last three fields are `A B C`.
fn parse_series(text: &str, file: &str) -> Result<RawSeries, GenError> {
    let parse_error = |line: usize, reason: String| GenError::Parse {
        file: file.to_string(),
        line,
        reason,
    };

    let mut series = RawSeries::default();
    // (coordinate, power, announced count, header line)
    let mut blocks: Vec<(usize, usize, usize, usize)> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if fields[0] == "VSOP87" {
            let coordinate = fields
                .get(5)
                .and_then(|f| f.parse::<usize>().ok())
                .filter(|c| (1..=3).contains(c))
                .ok_or_else(|| parse_error(line_no, "bad coordinate index".into()))?
                - 1;
            let power = fields
                .get(7)
                .and_then(|f| f.strip_prefix("*T**"))
                .and_then(|f| f.parse::<usize>().ok())
                .ok_or_else(|| parse_error(line_no, "bad power of T".into()))?;
            let count = fields
                .get(8)
                .and_then(|f| f.parse::<usize>().ok())
                .ok_or_else(|| parse_error(line_no, "bad term count".into()))?;

            let powers = &mut series.coordinates[coordinate];
            if power != powers.len() {
                return Err(parse_error(
                    line_no,
                    format!("expected T**{} for {}", powers.len(), COORDINATES[coordinate]),
                ));
            }
            powers.push(Vec::with_capacity(count));
            blocks.push((coordinate, power, count, line_no));
            continue;
        }

        let &(coordinate, power, _, _) = blocks
            .last()
            .ok_or_else(|| parse_error(line_no, "term before the first header".into()))?;
        let [a, b, c] = &fields[fields.len().saturating_sub(3)..] else {
            return Err(parse_error(line_no, "fewer than three fields".into()));
        };
        let term = TermLiteral {
            a: amplitude_literal(a)
                .ok_or_else(|| parse_error(line_no, format!("bad amplitude {a:?}")))?,
            b: float_literal(b).ok_or_else(|| parse_error(line_no, format!("bad phase {b:?}")))?,
            c: float_literal(c)
                .ok_or_else(|| parse_error(line_no, format!("bad frequency {c:?}")))?,
        };
        series.coordinates[coordinate][power].push(term);
    }

    for (coordinate, power, count, line_no) in blocks {
        let found = series.coordinates[coordinate][power].len();
        if found != count {
            return Err(parse_error(
                line_no,
                format!("header announces {count} terms, found {found}"),
            ));
        }
    }
    Ok(series)
}

/// Render a planet module in the layout of `src/vsop87/`.
fn render_module(constant: &str, display: &str, series: &RawSeries) -> String {
    let names = |k: usize| -> Vec<String> {
        (0..series.coordinates[k].len())
            .map(|p| format!("{}{p}", COORDINATES[k]))
            .collect()
    };

    let mut out = String::new();
    out.push_str("#![allow(clippy::excessive_precision)]\n");
    let _ = writeln!(out, "//! VSOP87D series for {display}");
    out.push_str("//!\n");
    out.push_str(concat!(
        "//! Heliocentric coordinates referred to the mean dynamical ecliptic",
        " and equinox of date.\n"
    ));
    let _ = writeln!(out, "//! Complete series, {} terms. {UNITS}", series.total_terms());
    out.push_str("\nuse super::{PlanetSeries, Term};\n\n");
    let _ = writeln!(out, "pub const {constant}: PlanetSeries = PlanetSeries {{");
    let _ = writeln!(out, "    longitude: &[{}],", names(0).join(", "));
    let _ = writeln!(out, "    latitude: &[{}],", names(1).join(", "));
    let _ = writeln!(out, "    radius: &[{}],", names(2).join(", "));
    out.push_str("};\n");

    for (k, powers) in series.coordinates.iter().enumerate() {
        for (name, terms) in names(k).iter().zip(powers) {
            let _ = writeln!(out, "\nconst {name}: &[Term] = &[");
            for t in terms {
                let _ = writeln!(out, "    Term {{ a: {}, b: {}, c: {} }},", t.a, t.b, t.c);
            }
            out.push_str("];\n");
        }
    }
    out
}

fn run(raw_dir: &Path, out_dir: &Path) -> Result<(), GenError> {
    for (module, display, suffix) in PLANETS {
        let raw_path = raw_dir.join(format!("VSOP87D.{suffix}"));
        let text = fs::read_to_string(&raw_path).map_err(|source| GenError::Io {
            path: raw_path.clone(),
            source,
        })?;
        let series = parse_series(&text, &raw_path.display().to_string())?;
        debug!(
            "{display}: {} L, {} B, {} R powers",
            series.coordinates[0].len(),
            series.coordinates[1].len(),
            series.coordinates[2].len()
        );

        let target = out_dir.join(format!("{module}.rs"));
        let rendered = render_module(&module.to_uppercase(), display, &series);
        fs::write(&target, rendered).map_err(|source| GenError::Io {
            path: target.clone(),
            source,
        })?;
        info!("{display}: {} terms -> {}", series.total_terms(), target.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <raw dir> <output dir>", args[0]);
        eprintln!("reads VSOP87D.mer … VSOP87D.nep, writes mercury.rs … neptune.rs");
        return ExitCode::FAILURE;
    }

    match run(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod vsop87_gen_test {
    use super::*;

    const SAMPLE: &str = "\
 VSOP87 VERSION D1    MERCURY   VARIABLE 1 (LBR)       *T**0      2 TERMS    HELIOCENTRIC
    1110  0  0  0  0  0  0  0  0  0  0  0  0  4.40250710144 0.00000000000      0.00000000000
    1110  1  0  0  0  0  0  0  0  0  0  0  0  0.40989414977 1.48302034195  26087.90314157420
 VSOP87 VERSION D1    MERCURY   VARIABLE 1 (LBR)       *T**1      1 TERMS    HELIOCENTRIC
    1111  1  0  0  0  0  0  0  0  0  0  0  0 -0.00000000002 3.00000000000      0.50000000000

 VSOP87 VERSION D1    MERCURY   VARIABLE 2 (LBR)       *T**0      1 TERMS    HELIOCENTRIC
    1120  1  0  0  0  0  0  0  0  0  0  0  0  0.11737528961 1.98357498767  26087.90314157420
 VSOP87 VERSION D1    MERCURY   VARIABLE 3 (LBR)       *T**0      1 TERMS    HELIOCENTRIC
    1130  0  0  0  0  0  0  0  0  0  0  0  0  0.39528271651 0.00000000000      0.00000000000
";

    #[test]
    fn test_literals() {
        assert_eq!(amplitude_literal("4.40250710144").unwrap(), "440250710.144");
        assert_eq!(amplitude_literal("0.40989414977").unwrap(), "40989414.977");
        assert_eq!(amplitude_literal("0.00000001000").unwrap(), "1.0");
        assert_eq!(amplitude_literal("-0.00000000002").unwrap(), "-0.002");
        assert!(amplitude_literal("x").is_none());

        assert_eq!(float_literal("26087.90314157420").unwrap(), "26087.9031415742");
        assert_eq!(float_literal("0.00000000000").unwrap(), "0.0");
        assert_eq!(float_literal("3").unwrap(), "3.0");
        assert_eq!(float_literal(".5").unwrap(), "0.5");
    }

    #[test]
    fn test_parse_series() {
        let series = parse_series(SAMPLE, "VSOP87D.mer").unwrap();
        let powers: Vec<usize> = series.coordinates.iter().map(Vec::len).collect();
        assert_eq!(powers, [2, 1, 1]);
        assert_eq!(series.total_terms(), 5);
        assert_eq!(
            series.coordinates[0][0][1],
            TermLiteral {
                a: "40989414.977".into(),
                b: "1.48302034195".into(),
                c: "26087.9031415742".into(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_files() {
        let short = SAMPLE.replacen("      2 TERMS", "      3 TERMS", 1);
        let err = parse_series(&short, "f").unwrap_err();
        assert!(err.to_string().starts_with("f:1: header announces 3 terms"), "{err}");

        let skipped = SAMPLE.replacen("*T**1", "*T**2", 1);
        assert!(parse_series(&skipped, "f").is_err());

        assert!(parse_series("  1 2 3\n", "f").is_err());
    }

    #[test]
    fn test_render_module() {
        let series = parse_series(SAMPLE, "VSOP87D.mer").unwrap();
        let module = render_module("MERCURY", "Mercury", &series);
        assert!(module.contains("//! Complete series, 5 terms."));
        assert!(module.contains("    longitude: &[L0, L1],\n    latitude: &[B0],\n"));
        let l1 = "const L1: &[Term] = &[\n    Term { a: -0.002, b: 3.0, c: 0.5 },\n];";
        assert!(module.contains(l1));
        assert!(module.contains("    Term { a: 440250710.144, b: 0.0, c: 0.0 },"));
    }
}
