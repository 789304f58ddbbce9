// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::Write, rc::Rc};

use log::{debug, trace};

use crate::{
    argument,
    condition::{self, TermSource},
    value::interpret_escape_sequences,
    Debugger, ForHeader, Keyword, Lexer, LineSource, LoopFrame, RuntimeError, RuntimeErrorKind,
    Scope, Statement, SyntaxError, Value,
};

/// Runs a program statement by statement, straight from its [`LineSource`].
///
/// `for` bodies are read from the source once and replayed from memory,
/// while the branches of an `if` are executed or skipped as they are read.
pub struct Interpreter<S, W, D>
        where S: LineSource, W: Write, D: Debugger {
    source: S,
    output: W,
    debugger: D,
    scope: Scope,
    line: usize,
    replays: Vec<Replay>,
    escape_sequences: bool,
}

impl<S, W, D> Interpreter<S, W, D>
        where S: LineSource, W: Write, D: Debugger {
    pub fn new(source: S, output: W, debugger: D) -> Self {
        Self {
            source,
            output,
            debugger,
            scope: Scope::new(),
            line: 0,
            replays: Vec::new(),
            escape_sequences: true,
        }
    }

    #[must_use]
    pub fn with_escape_sequences(self, escape_sequences: bool) -> Self {
        Self {
            escape_sequences,
            ..self
        }
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The diagnostic line number: how many lines were read from the source.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes every statement until the end of the source.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let result = self.execute_remaining()
            .and_then(|()| self.flush());

        if let Err(error) = &result {
            self.debugger.on_runtime_error(error);
        }

        self.debugger.on_exit();
        result
    }

    /// Dispatches a single statement. Statements that close a block are not
    /// executed, but handed back to whoever is running that block.
    pub fn interpret(&mut self, statement: Statement) -> Result<Control, RuntimeError> {
        self.debugger.on_statement(&statement, self.line);
        trace!("{}: {statement}", self.line);

        let Some(keyword) = statement.kind() else {
            return Err(self.error(SyntaxError::UnknownKeyword {
                keyword: statement.keyword().to_string(),
            }));
        };

        match keyword {
            Keyword::Print => self.execute_print(&statement)?,
            Keyword::PrintSpecial => self.execute_print_special(&statement)?,
            Keyword::Write => self.execute_write(&statement)?,
            Keyword::For => self.execute_for(&statement)?,
            Keyword::If => self.execute_if(&statement)?,

            Keyword::WhatIf => return Ok(Control::BlockEnd(BlockTerminator::WhatIf(statement))),
            Keyword::Otherwise => return Ok(Control::BlockEnd(BlockTerminator::Otherwise)),
            Keyword::End => {
                let closes = statement.argument(0).map(str::to_string);
                return Ok(Control::BlockEnd(BlockTerminator::End { closes }));
            }

            Keyword::Comment | Keyword::Blank => (),
        }

        Ok(Control::Continue)
    }

    /// Runs statements until the current statement stream is exhausted:
    /// the source at the top level, or the loop body being replayed.
    fn execute_remaining(&mut self) -> Result<(), RuntimeError> {
        while let Some(statement) = self.next_statement()? {
            if let Control::BlockEnd(terminator) = self.interpret(statement)? {
                return Err(self.error(terminator.into_stray_error()));
            }
        }

        Ok(())
    }

    fn next_statement(&mut self) -> Result<Option<Statement>, RuntimeError> {
        if let Some(replay) = self.replays.last_mut() {
            let statement = replay.body.get(replay.cursor).cloned();
            replay.cursor += 1;
            return Ok(statement);
        }

        let line = self.source.next_line()
            .map_err(|source| self.error(RuntimeErrorKind::IoFailure {
                action: "reading the program".to_string(),
                source,
            }))?;

        let Some(line) = line else {
            return Ok(None);
        };

        self.line += 1;
        let statement = Lexer::new(&line).tokenize().at_line(self.line)?;
        Ok(Some(statement))
    }

    fn execute_print(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        for arg in statement.arguments() {
            let value = argument::resolve(arg, &self.scope).at_line(self.line)?;
            let text = self.render(&value);
            self.emit(&text)?;
        }

        Ok(())
    }

    fn execute_print_special(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        let [arg] = statement.arguments() else {
            return Err(self.argument_count_error(Keyword::PrintSpecial, 1, statement));
        };

        let text = argument::resolve_text(arg, &self.scope).at_line(self.line)?;
        let special = match text.as_str() {
            "\\n" => "\n",
            "\\t" => "\t",
            other => return Err(self.error(SyntaxError::UnknownSpecialCharacter { argument: other.to_string() })),
        };

        self.emit(special)
    }

    fn execute_write(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        let [path, content] = statement.arguments() else {
            return Err(self.argument_count_error(Keyword::Write, 2, statement));
        };

        let path = argument::resolve_text(path, &self.scope).at_line(self.line)?;
        let content = argument::resolve(content, &self.scope).at_line(self.line)?;
        let content = self.render(&content);

        std::fs::write(&path, content.as_bytes())
            .map_err(|source| self.error(RuntimeErrorKind::IoFailure {
                action: format!("writing to `{path}`"),
                source,
            }))?;

        debug!("Wrote {} byte(s) to `{path}`", content.len());
        Ok(())
    }

    fn execute_for(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        let start = self.line;

        let header = ForHeader::parse(statement.arguments()).at_line(start)?;
        let initial_value = argument::resolve_integer(&header.initial_value, &self.scope).at_line(start)?;

        let body = self.buffer_loop_body(start)?;
        debug!("Buffered {} statement(s) for the loop over `{}` from line {start}", body.len(), header.induction_name);

        self.scope.bind(header.induction_name.clone(), Value::from(initial_value));

        let frame = LoopFrame { header, body };
        let result = self.iterate(&frame);

        self.scope.unbind(&frame.header.induction_name);
        result
    }

    /// Collects the statements up to the `end: for` that closes the loop
    /// opened on line `start`. That `end` is consumed, but not kept.
    fn buffer_loop_body(&mut self, start: usize) -> Result<Rc<[Statement]>, RuntimeError> {
        let mut body = Vec::new();
        let mut depth = 0_usize;

        loop {
            let Some(statement) = self.next_statement()? else {
                return Err(self.error(RuntimeErrorKind::UnterminatedBlock { keyword: Keyword::For, start }));
            };

            if statement.kind() == Some(Keyword::For) {
                depth += 1;
            } else if statement.is_end_of(Keyword::For) {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }

            body.push(statement);
        }

        Ok(body.into())
    }

    fn iterate(&mut self, frame: &LoopFrame) -> Result<(), RuntimeError> {
        let header = &frame.header;
        let condition = TermSource::split(&header.condition).at_line(self.line)?;
        let mut iterations = 0_usize;

        while condition.resolve(&self.scope).at_line(self.line)?.evaluate() {
            self.replay(Rc::clone(&frame.body))?;

            let current = argument::resolve_integer(&header.induction_name, &self.scope).at_line(self.line)?;
            let Some(next) = current.checked_add(header.step) else {
                return Err(self.error(RuntimeErrorKind::IntegerOverflow {
                    name: header.induction_name.clone(),
                }));
            };

            self.scope.bind(header.induction_name.clone(), Value::from(next));
            iterations += 1;
        }

        debug!("Loop over `{}` finished after {iterations} iteration(s)", header.induction_name);
        Ok(())
    }

    fn replay(&mut self, body: Rc<[Statement]>) -> Result<(), RuntimeError> {
        self.replays.push(Replay { body, cursor: 0 });
        let result = self.execute_remaining();
        self.replays.pop();
        result
    }

    fn execute_if(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        let start = self.line;

        if self.evaluate_guard(Keyword::If, statement)? {
            debug!("Taking the `if` branch opened on line {start}");
            let terminator = self.execute_branch(start)?;
            return self.finish_if(terminator, start);
        }

        loop {
            match self.skip_branch(start)? {
                BlockTerminator::End { closes } => return self.check_if_closed_by(closes),

                BlockTerminator::WhatIf(header) => {
                    if self.evaluate_guard(Keyword::WhatIf, &header)? {
                        debug!("Taking a `what if` branch of the `if` opened on line {start}");
                        let terminator = self.execute_branch(start)?;
                        return self.finish_if(terminator, start);
                    }
                }

                BlockTerminator::Otherwise => {
                    debug!("Taking the `otherwise` branch of the `if` opened on line {start}");
                    let terminator = self.execute_branch(start)?;
                    return self.finish_if(terminator, start);
                }
            }
        }
    }

    fn evaluate_guard(&self, keyword: Keyword, statement: &Statement) -> Result<bool, RuntimeError> {
        condition::evaluate_chain(keyword, statement.arguments(), &self.scope).at_line(self.line)
    }

    /// Executes statements until the branch ends with a `what if`,
    /// `otherwise` or `end`.
    fn execute_branch(&mut self, start: usize) -> Result<BlockTerminator, RuntimeError> {
        loop {
            let Some(statement) = self.next_statement()? else {
                return Err(self.error(RuntimeErrorKind::UnterminatedBlock { keyword: Keyword::If, start }));
            };

            if let Control::BlockEnd(terminator) = self.interpret(statement)? {
                return Ok(terminator);
            }
        }
    }

    /// Consumes statements without executing them, until the next branch
    /// header or `end` that belongs to this `if`.
    fn skip_branch(&mut self, start: usize) -> Result<BlockTerminator, RuntimeError> {
        let mut depth = 0_usize;

        loop {
            let Some(statement) = self.next_statement()? else {
                return Err(self.error(RuntimeErrorKind::UnterminatedBlock { keyword: Keyword::If, start }));
            };

            match statement.kind() {
                Some(keyword) if keyword.opens_block() => depth += 1,
                Some(Keyword::End) if depth > 0 => depth -= 1,
                Some(Keyword::End) => {
                    let closes = statement.argument(0).map(str::to_string);
                    return Ok(BlockTerminator::End { closes });
                }
                Some(Keyword::WhatIf) if depth == 0 => return Ok(BlockTerminator::WhatIf(statement)),
                Some(Keyword::Otherwise) if depth == 0 => return Ok(BlockTerminator::Otherwise),
                _ => (),
            }
        }
    }

    fn finish_if(&mut self, terminator: BlockTerminator, start: usize) -> Result<(), RuntimeError> {
        let mut terminator = terminator;

        loop {
            if let BlockTerminator::End { closes } = terminator {
                return self.check_if_closed_by(closes);
            }

            terminator = self.skip_branch(start)?;
        }
    }

    fn check_if_closed_by(&self, closes: Option<String>) -> Result<(), RuntimeError> {
        match closes {
            Some(found) if !found.eq_ignore_ascii_case(Keyword::If.as_ref()) => {
                Err(self.error(SyntaxError::MismatchedEnd { expected: Keyword::If, found }))
            }
            _ => Ok(()),
        }
    }

    fn render(&self, value: &Value) -> String {
        match value {
            Value::Text(text) if self.escape_sequences => interpret_escape_sequences(text),
            value => value.to_string(),
        }
    }

    fn emit(&mut self, text: &str) -> Result<(), RuntimeError> {
        self.output.write_all(text.as_bytes())
            .map_err(|source| self.error(RuntimeErrorKind::IoFailure {
                action: "printing".to_string(),
                source,
            }))
    }

    fn flush(&mut self) -> Result<(), RuntimeError> {
        self.output.flush()
            .map_err(|source| self.error(RuntimeErrorKind::IoFailure {
                action: "flushing the output".to_string(),
                source,
            }))
    }

    fn argument_count_error(&self, keyword: Keyword, expected: usize, statement: &Statement) -> RuntimeError {
        self.error(SyntaxError::ArgumentCount {
            keyword,
            expected,
            actual: statement.arguments().len(),
        })
    }

    #[must_use]
    fn error(&self, kind: impl Into<RuntimeErrorKind>) -> RuntimeError {
        RuntimeError::new(self.line, kind.into())
    }
}

#[must_use]
#[derive(Debug)]
pub enum Control {
    Continue,
    BlockEnd(BlockTerminator),
}

/// The statement that ended a block or one of the branches of an `if`.
#[derive(Debug)]
pub enum BlockTerminator {
    End { closes: Option<String> },
    WhatIf(Statement),
    Otherwise,
}

impl BlockTerminator {
    fn into_stray_error(self) -> SyntaxError {
        match self {
            Self::End { .. } => SyntaxError::StrayEnd,
            Self::WhatIf(..) => SyntaxError::StrayBranch { keyword: Keyword::WhatIf },
            Self::Otherwise => SyntaxError::StrayBranch { keyword: Keyword::Otherwise },
        }
    }
}

struct Replay {
    body: Rc<[Statement]>,
    cursor: usize,
}

trait AtLine<T> {
    fn at_line(self, line: usize) -> Result<T, RuntimeError>;
}

impl<T, E> AtLine<T> for Result<T, E>
        where E: Into<RuntimeErrorKind> {
    fn at_line(self, line: usize) -> Result<T, RuntimeError> {
        self.map_err(|error| RuntimeError::new(line, error.into()))
    }
}
