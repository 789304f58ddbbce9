// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod argument;
mod condition;
mod config;
mod debugger;
mod error;
mod for_loop;
mod interpreter;
mod keyword;
mod lexer;
mod scope;
mod source;
mod statement;
mod value;

pub use self::{
    argument::{resolve, resolve_integer, resolve_text, Argument},
    condition::{evaluate_chain, evaluate_term, Comparison, ConditionTerm, LogicGate, TermSource},
    config::{ConfigRoot, ConfigSectionLog, ConfigSectionRun},
    debugger::Debugger,
    error::{RuntimeError, RuntimeErrorKind, SyntaxError},
    for_loop::{ForHeader, LoopFrame},
    interpreter::{BlockTerminator, Control, Interpreter},
    keyword::Keyword,
    lexer::{tokenize, Lexer},
    scope::Scope,
    source::LineSource,
    statement::Statement,
    value::{interpret_escape_sequences, Value, ValueType},
};
