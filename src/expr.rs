//! Sandboxed math expressions in the variable `x`.
//!
//! A small expression language for supplying objective functions as text:
//! arithmetic operators `+ - * /`, exponentiation (`^` or `**`), unary
//! minus, parentheses, the variable `x`, the constants `pi` and `e`, and a
//! fixed function table — `sin`, `cos`, `exp`, `log` (natural log), `sqrt`.
//! Function and constant names may also be written with a `math.` qualifier
//! (`math.sin(x)`, `math.pi`).
//!
//! Every name is resolved against the allowlist at parse time; anything
//! else is rejected with [`Error::UnknownName`]. Nothing in the language
//! can reach the filesystem, call arbitrary code, or mutate state — the
//! whole attack surface of an `eval`-style provider is gone by
//! construction.
//!
//! Domain violations at evaluation time follow IEEE-754: `log(-1)` is NaN,
//! `1/0` is infinite. Such values flow into the search comparisons
//! unchanged.
//!
//! ```
//! use unimodal::Expr;
//!
//! let f = Expr::parse("(x - 2)**2 + math.sin(x)").unwrap();
//! assert!((f.eval(2.0) - 2.0_f64.sin()).abs() < 1e-12);
//!
//! assert!(Expr::parse("open(x)").is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// The allowlisted unary math functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MathFn {
    Sin,
    Cos,
    Exp,
    Log,
    Sqrt,
}

impl MathFn {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "exp" => Some(Self::Exp),
            "log" => Some(Self::Log),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Exp => x.exp(),
            Self::Log => x.ln(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Debug)]
enum Node {
    Num(f64),
    Var,
    Neg(Box<Node>),
    Bin(BinOp, Box<Node>, Box<Node>),
    Call(MathFn, Box<Node>),
}

impl Node {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Num(v) => *v,
            Node::Var => x,
            Node::Neg(inner) => -inner.eval(x),
            Node::Bin(op, lhs, rhs) => {
                let (l, r) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div => l / r,
                    BinOp::Pow => l.powf(r),
                }
            }
            Node::Call(func, arg) => func.apply(arg.eval(x)),
        }
    }
}

/// A parsed, allowlist-checked expression in `x`.
///
/// Implements [`FromStr`], so it can be used directly as a clap argument
/// type; malformed or out-of-allowlist expressions are rejected at argument
/// parsing time.
#[derive(Clone, Debug)]
pub struct Expr {
    root: Node,
    source: String,
}

impl Expr {
    /// Parse an expression, resolving every name against the allowlist.
    ///
    /// # Errors
    ///
    /// Lexing and parsing errors ([`Error::UnexpectedChar`],
    /// [`Error::UnexpectedToken`], [`Error::UnexpectedEnd`],
    /// [`Error::TrailingInput`]) carry byte positions;
    /// [`Error::UnknownName`] reports a name outside the allowlist.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens = lex(input)?;
        let mut parser = Parser { tokens: &tokens, pos: 0 };
        let root = parser.expr()?;
        if let Some(tok) = parser.peek() {
            return Err(Error::TrailingInput { pos: tok.pos });
        }
        Ok(Self {
            root,
            source: input.to_string(),
        })
    }

    /// Evaluate the expression at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// The original source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Tok {
    Num(f64),
    /// An identifier, possibly carrying a single `math.` qualifier.
    Name(String),
    Plus,
    Minus,
    Star,
    Slash,
    Pow,
    LParen,
    RParen,
}

impl Tok {
    fn render(&self) -> String {
        match self {
            Tok::Num(v) => v.to_string(),
            Tok::Name(name) => name.clone(),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Pow => "**".to_string(),
            Tok::LParen => "(".to_string(),
            Tok::RParen => ")".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
struct Token {
    tok: Tok,
    pos: usize,
}

fn lex(input: &str) -> Result<Vec<Token>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        match bytes[i] {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            b'+' => {
                tokens.push(Token { tok: Tok::Plus, pos: start });
                i += 1;
            }
            b'-' => {
                tokens.push(Token { tok: Tok::Minus, pos: start });
                i += 1;
            }
            b'*' => {
                if bytes.get(i + 1) == Some(&b'*') {
                    tokens.push(Token { tok: Tok::Pow, pos: start });
                    i += 2;
                } else {
                    tokens.push(Token { tok: Tok::Star, pos: start });
                    i += 1;
                }
            }
            b'^' => {
                tokens.push(Token { tok: Tok::Pow, pos: start });
                i += 1;
            }
            b'/' => {
                tokens.push(Token { tok: Tok::Slash, pos: start });
                i += 1;
            }
            b'(' => {
                tokens.push(Token { tok: Tok::LParen, pos: start });
                i += 1;
            }
            b')' => {
                tokens.push(Token { tok: Tok::RParen, pos: start });
                i += 1;
            }
            b'0'..=b'9' | b'.' => {
                i = scan_number(bytes, i);
                let text = &input[start..i];
                let value = text.parse::<f64>().map_err(|_| Error::UnexpectedToken {
                    found: text.to_string(),
                    pos: start,
                })?;
                tokens.push(Token { tok: Tok::Num(value), pos: start });
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                i = scan_ident(bytes, i);
                // Allow one `math.`-style qualifier.
                if bytes.get(i) == Some(&b'.')
                    && bytes
                        .get(i + 1)
                        .is_some_and(|c| c.is_ascii_alphabetic() || *c == b'_')
                {
                    i = scan_ident(bytes, i + 1);
                }
                tokens.push(Token {
                    tok: Tok::Name(input[start..i].to_string()),
                    pos: start,
                });
            }
            other => {
                return Err(Error::UnexpectedChar {
                    ch: other as char,
                    pos: start,
                })
            }
        }
    }

    Ok(tokens)
}

/// Scan digits, an optional fraction, and an optional exponent.
///
/// The exponent marker is only consumed when followed by a digit (with an
/// optional sign), so `2e` lexes as the number `2` and the name `e`.
fn scan_number(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}

fn scan_ident(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        i += 1;
    }
    i
}

/// Recursive-descent parser.
///
/// ```text
/// expr  := term (('+' | '-') term)*
/// term  := unary (('*' | '/') unary)*
/// unary := ('-' | '+') unary | power
/// power := atom (('^' | '**') unary)?
/// atom  := NUMBER | NAME | NAME '(' expr ')' | '(' expr ')'
/// ```
///
/// Exponentiation is right-associative and binds looser than unary minus in
/// its exponent but tighter in its base: `-x**2` is `-(x**2)` and `2**-1`
/// is `0.5`.
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect_rparen(&mut self) -> Result<()> {
        match self.bump() {
            Some(Token { tok: Tok::RParen, .. }) => Ok(()),
            Some(token) => Err(Error::UnexpectedToken {
                found: token.tok.render(),
                pos: token.pos,
            }),
            None => Err(Error::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Node> {
        let mut node = self.term()?;
        while let Some(token) = self.peek() {
            let op = match token.tok {
                Tok::Plus => BinOp::Add,
                Tok::Minus => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            node = Node::Bin(op, Box::new(node), Box::new(rhs));
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<Node> {
        let mut node = self.unary()?;
        while let Some(token) = self.peek() {
            let op = match token.tok {
                Tok::Star => BinOp::Mul,
                Tok::Slash => BinOp::Div,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            node = Node::Bin(op, Box::new(node), Box::new(rhs));
        }
        Ok(node)
    }

    fn unary(&mut self) -> Result<Node> {
        match self.peek() {
            Some(Token { tok: Tok::Minus, .. }) => {
                self.pos += 1;
                Ok(Node::Neg(Box::new(self.unary()?)))
            }
            Some(Token { tok: Tok::Plus, .. }) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Node> {
        let base = self.atom()?;
        if let Some(Token { tok: Tok::Pow, .. }) = self.peek() {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(Node::Bin(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Node> {
        let token = match self.bump() {
            Some(token) => token.clone(),
            None => return Err(Error::UnexpectedEnd),
        };
        match token.tok {
            Tok::Num(value) => Ok(Node::Num(value)),
            Tok::LParen => {
                let inner = self.expr()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Tok::Name(name) => self.name(&name, token.pos),
            other => Err(Error::UnexpectedToken {
                found: other.render(),
                pos: token.pos,
            }),
        }
    }

    /// Resolve a (possibly `math.`-qualified) name against the allowlist.
    fn name(&mut self, name: &str, pos: usize) -> Result<Node> {
        let (qualified, base) = match name.strip_prefix("math.") {
            Some(rest) => (true, rest),
            None => (false, name),
        };

        if let Some(Token { tok: Tok::LParen, .. }) = self.peek() {
            let Some(func) = MathFn::from_name(base) else {
                return Err(Error::UnknownName(name.to_string()));
            };
            self.pos += 1;
            let arg = self.expr()?;
            self.expect_rparen()?;
            return Ok(Node::Call(func, Box::new(arg)));
        }

        match base {
            // The variable is never math-qualified.
            "x" if !qualified => Ok(Node::Var),
            "pi" => Ok(Node::Num(core::f64::consts::PI)),
            "e" => Ok(Node::Num(core::f64::consts::E)),
            _ if MathFn::from_name(base).is_some() => Err(Error::UnexpectedToken {
                found: name.to_string(),
                pos,
            }),
            _ => Err(Error::UnknownName(name.to_string())),
        }
    }
}
