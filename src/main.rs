//! unimodal CLI — golden-section search from the command line.
//!
//! Supply the bracket with `--a`/`--b` and exactly one function source:
//! a built-in example (`--example quadratic`) or a sandboxed math
//! expression in `x` (`--expr "(x-2)**2 + math.sin(x)"`).

use clap::{ArgGroup, Parser};
use unimodal::{Direction, Example, Expr, GoldenSection, SearchResult};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "unimodal")]
#[command(about = "Golden-section search for 1D unimodal optimization")]
#[command(version)]
#[command(group(ArgGroup::new("function").required(true).args(["example", "expr"])))]
struct Cli {
    /// Left endpoint of the search interval.
    #[arg(long, allow_negative_numbers = true)]
    a: f64,

    /// Right endpoint of the search interval.
    #[arg(long, allow_negative_numbers = true)]
    b: f64,

    /// Tolerance for the final interval length.
    #[arg(long, default_value = "1e-5")]
    tol: f64,

    /// Maximum number of iterations.
    #[arg(long, default_value = "1000")]
    max_iter: usize,

    /// Search for a maximum instead of a minimum.
    #[arg(long)]
    maximize: bool,

    /// Use a built-in example function (quadratic | wavy).
    #[arg(long)]
    example: Option<Example>,

    /// Math expression in x, e.g. "(x-2)**2 + math.sin(x)".
    #[arg(long, allow_hyphen_values = true)]
    expr: Option<Expr>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let direction = if cli.maximize {
        Direction::Maximize
    } else {
        Direction::Minimize
    };
    let engine = GoldenSection::new().tol(cli.tol).max_iter(cli.max_iter);

    // The arg group guarantees exactly one source is present.
    let result = match (cli.example, &cli.expr) {
        (Some(example), None) => engine.search(|x| example.eval(x), cli.a, cli.b, direction)?,
        (None, Some(expr)) => engine.search(|x| expr.eval(x), cli.a, cli.b, direction)?,
        _ => return Err("provide exactly one of --example or --expr".into()),
    };

    print_result(&result);
    Ok(())
}

fn print_result(result: &SearchResult) {
    println!("Result:");
    println!("  x_opt = {}", format_sig(result.x, 12));
    println!("  f(x_opt) = {}", format_sig(result.value, 12));
    println!("  iterations = {}", result.iterations);
}

/// Format `v` with `digits` significant digits, `%g`-style: positional
/// notation for moderate exponents, scientific otherwise, trailing zeros
/// trimmed.
fn format_sig(v: f64, digits: usize) -> String {
    if !v.is_finite() || v == 0.0 {
        return format!("{v}");
    }

    // `{:.*e}` keeps one digit before the point, so `digits - 1` after it
    // gives `digits` significant digits, correctly rounded.
    let sci = format!("{:.*e}", digits - 1, v.abs());
    let (mantissa, exp_str) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exp: i32 = match exp_str.parse() {
        Ok(e) => e,
        Err(_) => return sci,
    };
    let digit_run: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let sign = if v < 0.0 { "-" } else { "" };

    let body = if exp < -4 || exp >= digits as i32 {
        // Scientific: first digit, optional fraction, exponent.
        let m = digit_run.trim_end_matches('0');
        if m.len() <= 1 {
            format!("{}e{exp}", &digit_run[..1])
        } else {
            format!("{}.{}e{exp}", &m[..1], &m[1..])
        }
    } else if exp < 0 {
        let leading = "0".repeat(exp.unsigned_abs() as usize - 1);
        let frac = format!("{leading}{digit_run}");
        format!("0.{}", frac.trim_end_matches('0'))
    } else {
        let point = exp as usize + 1;
        if point >= digit_run.len() {
            format!("{}{}", digit_run, "0".repeat(point - digit_run.len()))
        } else {
            let frac = digit_run[point..].trim_end_matches('0');
            if frac.is_empty() {
                digit_run[..point].to_string()
            } else {
                format!("{}.{frac}", &digit_run[..point])
            }
        }
    };

    format!("{sign}{body}")
}
