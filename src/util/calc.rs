//! Expression evaluator for the scientific calculator.
//!
//! DESIGN
//! ======
//! Tokenize, then recursive descent with this precedence (low to high):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := '-' unary | power
//! power   := postfix ('^' unary)?        right-associative
//! postfix := primary '!'*
//! primary := number | constant | function '(' expr ')' | '(' expr ')'
//! ```
//!
//! Unary minus binds looser than `^`, so `-2^2` is `-4`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `CalcError`; the keypad shows its message in place of
//! the result. Non-finite results are errors, never displayed as `inf`/`NaN`.

#[cfg(test)]
#[path = "calc_test.rs"]
mod calc_test;

use std::f64::consts::{E, PI};

use thiserror::Error;

/// Largest integer whose factorial fits in an `f64`.
const MAX_FACTORIAL: f64 = 170.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEG",
            AngleMode::Radians => "RAD",
        }
    }

    fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleMode::Degrees => value.to_radians(),
            AngleMode::Radians => value,
        }
    }

    fn from_radians(self, value: f64) -> f64 {
        match self {
            AngleMode::Degrees => value.to_degrees(),
            AngleMode::Radians => value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Enter an expression")]
    Empty,
    #[error("Unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Unknown name '{0}'")]
    UnknownName(String),
    #[error("Unexpected '{0}'")]
    UnexpectedToken(String),
    #[error("Incomplete expression")]
    UnexpectedEnd,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Math error: {0}")]
    Domain(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Number(f64),
    Name(String),
    Op(char),
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(value) => value.to_string(),
            Token::Name(name) => name.clone(),
            Token::Op(op) => op.to_string(),
            Token::LParen => "(".to_owned(),
            Token::RParen => ")".to_owned(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            let value = literal.parse::<f64>().map_err(|_| CalcError::InvalidNumber(literal.clone()))?;
            tokens.push(Token::Number(value));
        } else if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            tokens.push(Token::Name(chars[start..i].iter().collect::<String>().to_ascii_lowercase()));
        } else {
            let token = match c {
                '+' | '-' | '*' | '/' | '%' | '^' | '!' => Token::Op(c),
                '×' => Token::Op('*'),
                '÷' => Token::Op('/'),
                '−' => Token::Op('-'),
                'π' => Token::Name("pi".to_owned()),
                '√' => Token::Name("sqrt".to_owned()),
                '(' => Token::LParen,
                ')' => Token::RParen,
                other => return Err(CalcError::UnexpectedChar(other)),
            };
            tokens.push(token);
            i += 1;
        }
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    mode: AngleMode,
    ans: f64,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn eat_op(&mut self, ops: &[char]) -> Option<char> {
        match self.peek() {
            Some(Token::Op(op)) if ops.contains(op) => {
                let op = *op;
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op) = self.eat_op(&['+', '-']) {
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.unary()?;
        while let Some(op) = self.eat_op(&['*', '/', '%']) {
            let rhs = self.unary()?;
            value = match op {
                '*' => value * rhs,
                _ if rhs == 0.0 => return Err(CalcError::DivisionByZero),
                '/' => value / rhs,
                _ => value % rhs,
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, CalcError> {
        if self.eat_op(&['-']).is_some() {
            return Ok(-self.unary()?);
        }
        if self.eat_op(&['+']).is_some() {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<f64, CalcError> {
        let base = self.postfix()?;
        if self.eat_op(&['^']).is_some() {
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn postfix(&mut self) -> Result<f64, CalcError> {
        let mut value = self.primary()?;
        while self.eat_op(&['!']).is_some() {
            value = factorial(value)?;
        }
        Ok(value)
    }

    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                self.expect_close()?;
                Ok(value)
            }
            Some(Token::Name(name)) => self.named(&name),
            Some(other) => Err(CalcError::UnexpectedToken(other.describe())),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    fn named(&mut self, name: &str) -> Result<f64, CalcError> {
        match name {
            "pi" => return Ok(PI),
            "e" => return Ok(E),
            "ans" => return Ok(self.ans),
            _ => {}
        }
        if !is_function(name) {
            return Err(CalcError::UnknownName(name.to_owned()));
        }
        match self.next() {
            Some(Token::LParen) => {}
            Some(other) => return Err(CalcError::UnexpectedToken(other.describe())),
            None => return Err(CalcError::UnexpectedEnd),
        }
        let arg = self.expr()?;
        self.expect_close()?;
        apply_function(name, arg, self.mode)
    }

    fn expect_close(&mut self) -> Result<(), CalcError> {
        match self.next() {
            Some(Token::RParen) => Ok(()),
            Some(other) => Err(CalcError::UnexpectedToken(other.describe())),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}

fn is_function(name: &str) -> bool {
    matches!(name, "sin" | "cos" | "tan" | "asin" | "acos" | "atan" | "sqrt" | "ln" | "log" | "abs")
}

fn apply_function(name: &str, arg: f64, mode: AngleMode) -> Result<f64, CalcError> {
    match name {
        "sin" => Ok(mode.to_radians(arg).sin()),
        "cos" => Ok(mode.to_radians(arg).cos()),
        "tan" => {
            let radians = mode.to_radians(arg);
            if radians.cos().abs() < 1e-12 {
                return Err(CalcError::Domain("tan is undefined here"));
            }
            Ok(radians.tan())
        }
        "asin" | "acos" if !(-1.0..=1.0).contains(&arg) => Err(CalcError::Domain("input must be between -1 and 1")),
        "asin" => Ok(mode.from_radians(arg.asin())),
        "acos" => Ok(mode.from_radians(arg.acos())),
        "atan" => Ok(mode.from_radians(arg.atan())),
        "sqrt" if arg < 0.0 => Err(CalcError::Domain("square root of a negative number")),
        "sqrt" => Ok(arg.sqrt()),
        "ln" | "log" if arg <= 0.0 => Err(CalcError::Domain("logarithm of a non-positive number")),
        "ln" => Ok(arg.ln()),
        "log" => Ok(arg.log10()),
        "abs" => Ok(arg.abs()),
        other => Err(CalcError::UnknownName(other.to_owned())),
    }
}

fn factorial(value: f64) -> Result<f64, CalcError> {
    if value < 0.0 || value.fract() != 0.0 {
        return Err(CalcError::Domain("factorial needs a non-negative integer"));
    }
    if value > MAX_FACTORIAL {
        return Err(CalcError::Domain("result is too large"));
    }
    let mut product = 1.0;
    let mut n = 2.0;
    while n <= value {
        product *= n;
        n += 1.0;
    }
    Ok(product)
}

/// Evaluate `input`. `ans` is the value the `ans` name resolves to.
///
/// # Errors
///
/// Returns a `CalcError` for malformed input, domain errors, or non-finite
/// results.
pub fn evaluate(input: &str, mode: AngleMode, ans: f64) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }
    let mut parser = Parser { tokens: &tokens, pos: 0, mode, ans };
    let value = parser.expr()?;
    if let Some(extra) = parser.peek() {
        return Err(CalcError::UnexpectedToken(extra.describe()));
    }
    if !value.is_finite() {
        return Err(CalcError::Domain("result is not finite"));
    }
    // Trig results such as sin(180°) land a few ulps from zero.
    Ok(if value.abs() < 1e-12 { 0.0 } else { value })
}

/// Display form: at most 10 decimals, trailing zeros trimmed, scientific
/// notation for very large or very small magnitudes.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if !(1e-6..1e15).contains(&magnitude) {
        return format!("{value:e}");
    }
    let fixed = format!("{value:.10}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}
