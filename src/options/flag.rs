//! Recognized option tokens

use std::fmt;

/// One of the six option tokens accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Keep,
    Pad,
    Trim,
    Global,
    Format,
    Reverse,
}

impl Flag {
    /// Match a token exactly; `-kfoo`, `--k` and the like are not flags.
    pub fn from_token(token: &str) -> Option<Flag> {
        match token {
            "-k" => Some(Flag::Keep),
            "-p" => Some(Flag::Pad),
            "-t" => Some(Flag::Trim),
            "-g" => Some(Flag::Global),
            "-f" => Some(Flag::Format),
            "-r" => Some(Flag::Reverse),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Flag::Keep => "-k",
            Flag::Pad => "-p",
            Flag::Trim => "-t",
            Flag::Global => "-g",
            Flag::Format => "-f",
            Flag::Reverse => "-r",
        }
    }

    /// Number of tokens following the flag that belong to it.
    pub fn arity(&self) -> usize {
        match self {
            Flag::Keep | Flag::Trim => 1,
            Flag::Pad | Flag::Format => 2,
            Flag::Global | Flag::Reverse => 0,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
