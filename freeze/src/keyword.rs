// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::Display, strum::EnumIter)]
pub enum Keyword {
    #[strum(serialize = "print")]
    Print,

    #[strum(serialize = "print special")]
    PrintSpecial,

    #[strum(serialize = "write")]
    Write,

    #[strum(serialize = "for")]
    For,

    #[strum(serialize = "if")]
    If,

    #[strum(serialize = "what if")]
    WhatIf,

    #[strum(serialize = "otherwise")]
    Otherwise,

    #[strum(serialize = "end")]
    End,

    #[strum(serialize = "//")]
    Comment,

    /// The explicit blank-line marker, written as the two characters `\n`.
    #[strum(serialize = "\\n")]
    Blank,
}

impl Keyword {
    /// Keywords are matched case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref().eq_ignore_ascii_case(input))
    }

    /// Whether this keyword opens a block that is closed by a matching `end`.
    #[must_use]
    pub const fn opens_block(&self) -> bool {
        matches!(self, Self::For | Self::If)
    }
}
